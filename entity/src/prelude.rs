pub use super::announcement::Entity as Announcement;
pub use super::guest::Entity as Guest;
pub use super::location::Entity as Location;
pub use super::meal::Entity as Meal;
pub use super::meal_day::Entity as MealDay;
pub use super::meal_day_attendee::Entity as MealDayAttendee;
pub use super::meal_day_meal::Entity as MealDayMeal;
pub use super::meal_tag::Entity as MealTag;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
