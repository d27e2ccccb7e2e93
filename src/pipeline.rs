//! The rotation session: one linear pass, each step at most once, first
//! error aborts the rest. There is no retry and no rollback; a failure
//! after the access point accepted the new key but before the store or the
//! rejoin succeeded is accepted as a manual-recovery situation.

use crate::domain::{Password, PasswordSource};
use crate::services::ap::AccessPointController;
use crate::services::generator::Generator;
use crate::services::journal::Journal;
use crate::services::notify::Notifier;
use crate::services::store;
use crate::services::wifi::Connector;
use std::path::Path;

pub struct Pipeline<'a> {
    pub store_path: &'a Path,
    pub connector: &'a dyn Connector,
    pub generator: &'a dyn Generator,
    pub controller: &'a dyn AccessPointController,
    pub notifier: &'a dyn Notifier,
    pub journal: &'a dyn Journal,
}

impl Pipeline<'_> {
    pub fn run(&self, explicit: Option<Password>) -> anyhow::Result<PasswordSource> {
        self.journal.record("rotation session started");

        self.journal.record(&format!(
            "reading the stored password from {}",
            self.store_path.display()
        ));
        let current = store::read_password(self.store_path)?;

        self.journal
            .record("joining the wifi network with the stored password");
        self.connector.join(&current)?;

        let (fresh, source) = match explicit {
            Some(password) => {
                self.journal
                    .record("using the password supplied on the command line");
                (password, PasswordSource::Supplied)
            }
            None => {
                self.journal
                    .record("requesting a fresh password from the generator service");
                (self.generator.generate()?, PasswordSource::Generated)
            }
        };

        self.journal
            .record("updating the pre-shared key on the access point");
        self.controller.set_password(&fresh)?;

        self.journal.record(&format!(
            "storing the new password in {}",
            self.store_path.display()
        ));
        store::write_password(self.store_path, &fresh)?;

        self.journal
            .record("rejoining the wifi network with the new password");
        self.connector.join(&fresh)?;

        self.journal
            .record("announcing the new password to the chat channel");
        let reply = self
            .notifier
            .send(&format!("Wifi password of this month is: {}", fresh.as_str()))?;
        self.journal.record(&format!("chat api replied: {reply}"));

        self.journal.record("rotation session finished");
        Ok(source)
    }
}
