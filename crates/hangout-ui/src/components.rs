mod activity_card;
mod activity_form;
mod activity_link;
mod activity_pool;
mod daily_plan;
mod day_cell;
mod day_picker;
mod plan_entry;

pub use activity_card::ActivityCard;
pub use activity_form::ActivityForm;
pub use activity_link::ActivityLink;
pub use activity_pool::ActivityPool;
pub use daily_plan::DailyPlan;
pub use day_cell::DayCell;
pub use day_picker::DayPicker;
pub use plan_entry::PlanEntry;
