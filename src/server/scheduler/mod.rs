pub mod meal_reminders;
