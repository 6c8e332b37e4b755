//! Plain-text rendering of the directory document.

use std::fmt::Write;

use products_directory::{CardNode, DirectoryController, DirectoryError, MemoryDocument, ModalNode};

pub const HELP: &str = "\
commands:
  /<text> | search <text>   filter by name or username (empty clears)
  open <handle>             show details for a card
  next | n, prev | p        move through the filtered employees
  close | c                 close the detail view
  help | ?                  show this help
  quit | q                  leave";

const RULE: &str = "------------------------------------------------------------";

pub fn render(controller: &DirectoryController<MemoryDocument>) -> String {
    let mut out = String::new();
    let registry = controller.registry();
    let document = controller.document();

    let _ = write!(
        out,
        "== employees: {} shown, {} loaded",
        document.cards().count(),
        registry.len()
    );
    if !controller.query().is_empty() {
        let _ = write!(out, ", search \"{}\"", controller.query());
    }
    out.push_str(" ==\n");

    let mut any = false;
    for card in document.cards() {
        any = true;
        render_card(&mut out, card);
    }
    if !any {
        out.push_str("  (no employees)\n");
    }

    for modal in document.modals() {
        render_modal(&mut out, modal);
    }
    out
}

/// Output of `list`: one line per card, or the cards as a pretty JSON array.
pub fn render_list(cards: &[&CardNode], json: bool) -> serde_json::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(cards)?;
        out.push('\n');
        return Ok(out);
    }
    let mut out = String::new();
    for card in cards {
        render_card(&mut out, card);
    }
    Ok(out)
}

pub fn render_error(err: &DirectoryError) -> String {
    format!("! [{}] {err}", err.code())
}

pub fn render_card(out: &mut String, card: &CardNode) {
    let _ = writeln!(
        out,
        "  [{}] {} <{}> {}",
        card.handle, card.name, card.email, card.location
    );
}

pub fn render_modal(out: &mut String, modal: &ModalNode) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {}", modal.photo);
    let _ = writeln!(out, "  {}", modal.name);
    let _ = writeln!(out, "  {}", modal.email);
    let _ = writeln!(out, "  {}", modal.location);
    let _ = writeln!(out, "  --");
    let _ = writeln!(out, "  {}", modal.cell);
    let _ = writeln!(out, "  {}", modal.address);
    let _ = writeln!(out, "  Birthday: {}", modal.birthday);
    let _ = writeln!(out, "  [prev] Previous Employee   [next] Next Employee   [close] X");
    let _ = writeln!(out, "{RULE}");
}
