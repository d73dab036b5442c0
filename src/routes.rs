// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const USER_ITEM: &str = "/user/{id}";
pub const SEARCH: &str = "/search";
