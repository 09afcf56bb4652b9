//! Presentation state derived from a [`Session`] and a modpack listing.
//!
//! Front-ends call [`render`] after every change and draw the result; they
//! never patch a previously drawn view.

use std::path::PathBuf;

use crate::{models::modpacks::ModpackDetails, Appearance, ColorTheme, Session};

pub const CARDS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Rename,
    Delete,
}

impl CardAction {
    pub const ALL: [CardAction; 2] = [Self::Rename, Self::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Modpack {
        name: String,
        details: Option<ModpackDetails>,
        actions: Vec<CardAction>,
    },
    Add,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub storage_folder: PathBuf,
    pub appearance: Appearance,
    pub color_theme: ColorTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub toolbar: Toolbar,
    pub rows: Vec<Vec<Card>>,
}

impl From<&Session> for Toolbar {
    fn from(session: &Session) -> Self {
        Toolbar {
            storage_folder: session.root.clone(),
            appearance: session.appearance,
            color_theme: session.color_theme,
        }
    }
}

impl View {
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.rows.iter().flatten()
    }
}

/// One entry of a listing: a name, optionally with its scanned details
pub enum Entry {
    Name(String),
    Detailed(ModpackDetails),
}

impl From<String> for Entry {
    fn from(name: String) -> Self {
        Entry::Name(name)
    }
}

impl From<ModpackDetails> for Entry {
    fn from(details: ModpackDetails) -> Self {
        Entry::Detailed(details)
    }
}

pub fn render<I, E>(session: &Session, modpacks: I) -> View
where
    I: IntoIterator<Item = E>,
    E: Into<Entry>,
{
    let cards = modpacks
        .into_iter()
        .map(|entry| {
            let (name, details) = match entry.into() {
                Entry::Name(name) => (name, None),
                Entry::Detailed(details) => (details.name.clone(), Some(details)),
            };
            Card::Modpack {
                name,
                details,
                actions: CardAction::ALL.to_vec(),
            }
        })
        .chain(std::iter::once(Card::Add))
        .collect::<Vec<_>>();

    View {
        toolbar: Toolbar::from(session),
        rows: cards
            .chunks(CARDS_PER_ROW)
            .map(|row| row.to_vec())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|x| x.to_string()).collect()
    }

    fn card_name(card: &Card) -> Option<&str> {
        match card {
            Card::Modpack { name, .. } => Some(name.as_str()),
            Card::Add => None,
        }
    }

    #[test]
    fn empty_listing_has_only_add_card() {
        let view = render(&Session::new("/packs"), Vec::<String>::new());
        assert_eq!(view.rows, vec![vec![Card::Add]]);
    }

    #[test]
    fn cards_wrap_after_three() {
        let view = render(
            &Session::new("/packs"),
            names(&["a", "b", "c", "d", "e", "f"]),
        );
        assert_eq!(view.rows.len(), 3);
        assert!(view.rows.iter().all(|row| row.len() <= CARDS_PER_ROW));
        assert_eq!(view.rows[2], vec![Card::Add]);

        let order: Vec<_> = view.cards().filter_map(card_name).collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn add_card_shares_last_row() {
        let view = render(&Session::new("/packs"), names(&["a", "b"]));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].last(), Some(&Card::Add));
    }

    #[test]
    fn toolbar_mirrors_session() {
        let mut session = Session::new("/packs");
        session.set_appearance(Appearance::Dark);
        session.set_color_theme(ColorTheme::Green);
        let view = render(&session, names(&["a"]));
        assert_eq!(view.toolbar.storage_folder, PathBuf::from("/packs"));
        assert_eq!(view.toolbar.appearance, Appearance::Dark);
        assert_eq!(view.toolbar.color_theme, ColorTheme::Green);
    }

    #[test]
    fn detailed_entries_keep_details() {
        let details = ModpackDetails {
            name: "Base".to_string(),
            file_count: 2,
            total_bytes: 10,
            modified_at: None,
        };
        let view = render(&Session::new("/packs"), vec![details.clone()]);
        match &view.rows[0][0] {
            Card::Modpack {
                name,
                details: Some(card_details),
                actions,
            } => {
                assert_eq!(name, "Base");
                assert_eq!(card_details, &details);
                assert_eq!(actions, &CardAction::ALL.to_vec());
            }
            other => panic!("unexpected card {other:?}"),
        }
    }
}
