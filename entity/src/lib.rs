pub mod prelude;

pub mod announcement;
pub mod guest;
pub mod location;
pub mod meal;
pub mod meal_day;
pub mod meal_day_attendee;
pub mod meal_day_meal;
pub mod meal_tag;
pub mod tag;
pub mod types;
pub mod user;
