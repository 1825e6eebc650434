mod apply;
mod favorite;
mod game;
mod level;
mod mission;
mod notification;
mod payment;
mod points;
mod user;
