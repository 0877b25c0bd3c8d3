use web_sys::{Storage, Window};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "current_user";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn save_session(token: &str, user_json: &str) -> Result<(), String> {
    let storage = local_storage()?;
    storage
        .set_item(TOKEN_KEY, token)
        .map_err(|_| "Failed to store token".to_string())?;
    storage
        .set_item(USER_KEY, user_json)
        .map_err(|_| "Failed to store user profile".to_string())
}
