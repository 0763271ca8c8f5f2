mod announcement;
mod guest;
mod location;
mod meal;
mod meal_day;
mod tag;
mod user;
