use crate::model::driver::DriverDto;

/// Explicit session object for the whole front end: the bearer token plus the
/// cached driver identity, provided through context at the app root.
///
/// `loaded` stays false until the one-time hydration from browser storage has
/// run; the route guard renders nothing before that.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub driver: Option<DriverDto>,
    pub loaded: bool,
}

impl SessionState {
    /// Hydrate from browser storage. On the server render there is no
    /// storage, so the state stays unloaded and the guard shows nothing.
    pub fn load() -> Self {
        #[cfg(feature = "web")]
        {
            let (token, driver) = storage::read();
            return Self {
                token,
                driver,
                loaded: true,
            };
        }

        #[cfg(not(feature = "web"))]
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.driver.is_some()
    }

    /// Store the credentials of a fresh login/registration and persist them.
    pub fn sign_in(&mut self, token: String, driver: DriverDto) {
        #[cfg(feature = "web")]
        storage::write(&token, &driver);

        self.token = Some(token);
        self.driver = Some(driver);
        self.loaded = true;
    }

    /// Drop the session and clear persisted credentials.
    pub fn sign_out(&mut self) {
        #[cfg(feature = "web")]
        storage::clear();

        self.token = None;
        self.driver = None;
    }
}

#[cfg(feature = "web")]
mod storage {
    use crate::model::driver::DriverDto;

    const TOKEN_KEY: &str = "fraudwatch:token";
    const DRIVER_KEY: &str = "fraudwatch:driver";

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn read() -> (Option<String>, Option<DriverDto>) {
        let Some(storage) = local_storage() else {
            return (None, None);
        };

        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let driver = storage
            .get_item(DRIVER_KEY)
            .ok()
            .flatten()
            .and_then(|json| serde_json::from_str(&json).ok());

        (token, driver)
    }

    pub fn write(token: &str, driver: &DriverDto) {
        let Some(storage) = local_storage() else {
            return;
        };

        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(driver) {
            let _ = storage.set_item(DRIVER_KEY, &json);
        }
    }

    pub fn clear() {
        let Some(storage) = local_storage() else {
            return;
        };

        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(DRIVER_KEY);
    }
}
