// ShopTrail services
// Services provide configuration and the outbound product search client.

pub mod product_search;
pub mod settings_engine;
