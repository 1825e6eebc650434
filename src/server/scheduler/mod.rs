pub mod game_kickoff;
