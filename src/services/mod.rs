pub mod outfit;
pub mod providers;
pub mod recommendations;
pub mod weather_lookup;
