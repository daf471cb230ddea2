pub mod postcodes;
