mod association;
mod catalog;
mod game;
mod release_date;
