use colored::{Color, ColoredString, Colorize};
use modpack_core::{
    models::modpacks::ModpackDetails,
    view::{Card, CardAction, Toolbar, View},
    Appearance, ColorTheme,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CARD_WIDTH: usize = 24;
const INNER_WIDTH: usize = CARD_WIDTH - 2;

#[derive(Clone, Copy)]
struct Palette {
    accent: Color,
    danger: Color,
    muted: Color,
}

impl Palette {
    fn new(color_theme: ColorTheme, appearance: Appearance) -> Self {
        let dark = appearance == Appearance::Dark;
        let accent = match (color_theme, dark) {
            (ColorTheme::Blue, false) => Color::Blue,
            (ColorTheme::Blue, true) => Color::BrightBlue,
            (ColorTheme::Green, false) => Color::Green,
            (ColorTheme::Green, true) => Color::BrightGreen,
            (ColorTheme::DarkBlue, false) => Color::TrueColor { r: 31, g: 83, b: 141 },
            (ColorTheme::DarkBlue, true) => Color::TrueColor { r: 58, g: 126, b: 191 },
        };
        let (danger, muted) = match appearance {
            Appearance::Dark => (Color::BrightRed, Color::BrightBlack),
            Appearance::Light => (Color::Red, Color::Black),
            Appearance::System => (Color::Red, Color::BrightBlack),
        };
        Palette {
            accent,
            danger,
            muted,
        }
    }
}

pub fn draw_toolbar(toolbar: &Toolbar) -> String {
    let palette = Palette::new(toolbar.color_theme, toolbar.appearance);
    format!(
        "{} {}   {} {}   {} {}",
        "Storage Folder:".bold(),
        toolbar.storage_folder.display().to_string().color(palette.accent),
        "Appearance:".bold(),
        toolbar.appearance,
        "Color Theme:".bold(),
        toolbar.color_theme,
    )
}

/// Draws the toolbar followed by the card grid, one text line per output line
pub fn draw(view: &View) -> String {
    let palette = Palette::new(view.toolbar.color_theme, view.toolbar.appearance);
    let mut out = draw_toolbar(&view.toolbar);
    out.push_str("\n\n");

    for row in view.rows.iter() {
        let cards = row
            .iter()
            .map(|card| card_lines(card, palette))
            .collect::<Vec<_>>();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let joined = cards
                .iter()
                .map(|lines| {
                    lines
                        .get(line)
                        .map(ToString::to_string)
                        .unwrap_or_else(|| " ".repeat(CARD_WIDTH + 2))
                })
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(joined.trim_end());
            out.push('\n');
        }
    }

    out
}

pub fn describe(details: &ModpackDetails) -> String {
    let files = match details.file_count {
        1 => "1 file".to_string(),
        n => format!("{} files", n),
    };
    match details.modified_at {
        Some(modified) => format!(
            "{}, {}, modified {}",
            files,
            details.human_size(),
            modified.format("%Y-%m-%d %H:%M UTC")
        ),
        None => format!("{}, {}", files, details.human_size()),
    }
}

fn card_lines(card: &Card, palette: Palette) -> Vec<ColoredString> {
    let top = format!("+{}+", "-".repeat(CARD_WIDTH)).color(palette.accent);
    let edge = "|".color(palette.accent);

    let (name, summary, actions) = match card {
        Card::Modpack {
            name,
            details,
            actions,
        } => {
            let summary = details.as_ref().map(short_summary).unwrap_or_default();
            (name.as_str(), summary, actions.as_slice())
        }
        Card::Add => ("+ Add Modpack", String::new(), &[][..]),
    };

    let plain_actions = actions
        .iter()
        .map(|x| format!("[{}]", x.label()))
        .collect::<Vec<_>>()
        .join(" ");
    let colored_actions = actions
        .iter()
        .map(|x| {
            let label = format!("[{}]", x.label());
            match x {
                CardAction::Delete => label.color(palette.danger).to_string(),
                CardAction::Rename => label,
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let actions_cell = format!(
        "{}{}",
        colored_actions,
        " ".repeat(INNER_WIDTH.saturating_sub(plain_actions.width()))
    );

    vec![
        top.clone(),
        framed(&edge, pad(name).bold()),
        framed(&edge, pad(&summary).color(palette.muted)),
        framed(&edge, actions_cell.normal()),
        top,
    ]
}

fn framed(edge: &ColoredString, cell: ColoredString) -> ColoredString {
    format!("{} {} {}", edge, cell, edge).normal()
}

fn short_summary(details: &ModpackDetails) -> String {
    format!("{} files, {}", details.file_count, details.human_size())
}

/// Pads or truncates to the inner width of a card, in terminal columns
fn pad(text: &str) -> String {
    let width = text.width();
    if width <= INNER_WIDTH {
        return format!("{}{}", text, " ".repeat(INNER_WIDTH - width));
    }

    let mut truncated = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > INNER_WIDTH - 1 {
            break;
        }
        truncated.push(c);
        used += char_width;
    }
    truncated.push('~');
    format!("{}{}", truncated, " ".repeat(INNER_WIDTH - 1 - used))
}
