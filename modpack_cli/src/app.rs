use log::warn;
use modpack_core::{
    view::{self, Entry},
    ModpackStore, Session,
};

use crate::render;

/// State shared by every command of one run
pub struct App {
    pub session: Session,
    pub show_details: bool,
}

impl App {
    pub fn new(session: Session, show_details: bool) -> Self {
        App {
            session,
            show_details,
        }
    }

    /// Lists the storage folder and renders the whole view from scratch
    pub fn render(&self) -> anyhow::Result<view::View> {
        let store = self.session.store();
        let names = store.list()?;
        let view = if self.show_details {
            view::render(&self.session, detailed_entries(&store, names))
        } else {
            view::render(&self.session, names)
        };
        Ok(view)
    }

    pub fn refresh(&self) -> anyhow::Result<()> {
        let view = self.render()?;
        println!("{}", render::draw(&view));
        Ok(())
    }
}

/// Scans every modpack; one that can't be scanned still gets a plain card
fn detailed_entries(store: &ModpackStore, names: Vec<String>) -> Vec<Entry> {
    names
        .into_iter()
        .map(|name| match store.details(&name) {
            Ok(details) => Entry::Detailed(details),
            Err(err) => {
                warn!("Can't read details of {}: {}", name, err);
                Entry::Name(name)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use modpack_core::view::Card;

    use super::*;

    #[test]
    fn unreadable_modpack_keeps_its_card() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModpackStore::new(dir.path());
        store.create("Base").unwrap();
        std::fs::write(dir.path().join("Base/a.package"), "abc").unwrap();

        // "Gone" vanished between listing and scanning
        let entries = detailed_entries(&store, vec!["Base".to_string(), "Gone".to_string()]);
        assert!(matches!(&entries[0], Entry::Detailed(details) if details.total_bytes == 3));
        assert!(matches!(&entries[1], Entry::Name(name) if name == "Gone"));
    }

    #[test]
    fn details_view_shows_every_modpack() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Session::new(dir.path()), true);
        let store = app.session.store();
        store.create("Base").unwrap();
        store.create("Core").unwrap();

        let view = app.render().unwrap();
        let detailed = view
            .cards()
            .filter(|card| matches!(card, Card::Modpack { details: Some(_), .. }))
            .count();
        assert_eq!(detailed, 2);
        assert_eq!(view.cards().count(), 3);
    }
}
