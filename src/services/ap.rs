use crate::config::Config;
use crate::domain::Password;
use crate::error::RekeyError;
use headless_chrome::{Browser, LaunchOptions};
use log::debug;

/// Sets the access point's pre-shared key. One implementation per router
/// firmware; supporting a new model means writing a new implementation.
pub trait AccessPointController {
    fn set_password(&self, new: &Password) -> anyhow::Result<()>;
}

/// Drives the stock frameset admin UI of the office GPON router with a
/// headless Chrome session. The element anchors below are firmware-specific
/// and brittle; a firmware update is expected to break them loudly, never
/// silently.
pub struct FramesetAdmin {
    url: String,
    username: Option<String>,
    password: Option<String>,
}

impl FramesetAdmin {
    pub fn from_config(config: &Config) -> Self {
        Self {
            url: config.ap_url.clone(),
            username: config.ap_username.clone(),
            password: config.ap_password.clone(),
        }
    }
}

// Anchors inside the frameset: the menu lives in the `title` frame, the
// form in `mainFrame`. Lookups pierce same-origin frames.
const WIRELESS_MENU: &str = "//*[@id=\"f20\"]";
const SECURITY_MENU: &str = "//*[@id=\"s30\"]";
const SETTINGS_LINK: &str = "//*[@id=\"32\"]/a";
const PSK_FIELD: &str = "//*[@name=\"pskValue\"]";
const APPLY_CONTROL: &str = "//*[@id=\"wlwpa_mbssid_value_01\"]";

fn ui<T>(step: &str, result: anyhow::Result<T>) -> anyhow::Result<T> {
    result.map_err(|e| RekeyError::AdminUi(format!("{step}: {e}")).into())
}

impl AccessPointController for FramesetAdmin {
    fn set_password(&self, new: &Password) -> anyhow::Result<()> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| RekeyError::AdminUi(format!("browser options: {e}")))?;
        // the Browser owns the chrome child process and kills it on drop,
        // so every return path below releases the session
        let browser = ui("launch chrome", Browser::new(options))?;
        let tab = ui("open tab", browser.new_tab())?;

        // answer the admin UI's basic-auth challenge at the protocol level
        ui(
            "register admin credentials",
            tab.authenticate(self.username.clone(), self.password.clone()),
        )?;
        ui("open admin page", tab.navigate_to(&self.url))?;
        ui("wait for admin page", tab.wait_until_navigated())?;

        debug!("walking the wireless security screens at {}", self.url);
        let click = |step: &str, xpath: &str| -> anyhow::Result<()> {
            let element = ui(step, tab.wait_for_xpath(xpath))?;
            ui(step, element.click())?;
            Ok(())
        };
        click("open wireless menu", WIRELESS_MENU)?;
        click("open security menu", SECURITY_MENU)?;
        click("open wireless settings", SETTINGS_LINK)?;

        let field = ui("find psk field", tab.wait_for_xpath(PSK_FIELD))?;
        ui(
            "clear psk field",
            field.call_js_fn("function() { this.value = ''; }", vec![], false),
        )?;
        ui("enter new psk", field.type_into(new.as_str()))?;
        click("apply new psk", APPLY_CONTROL)?;
        Ok(())
    }
}
