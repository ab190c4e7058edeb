// ShopTrail state managers
// Managers own persistent user state: the activity history log.

pub mod activity_log;
