mod apply;
mod auth;
mod favorite;
mod mission;
mod notification;
mod payment;
mod user;
