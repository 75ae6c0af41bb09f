use colored::Colorize;
use fitcrm::api::{ClientListing, CmdMessage, MessageLevel};
use fitcrm::config::FitcrmConfig;
use fitcrm::enrich::Enrichment;
use fitcrm::model::ClientRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 22;
const EMAIL_WIDTH: usize = 26;
const PHONE_WIDTH: usize = 14;
const GOAL_WIDTH: usize = 16;
const DATE_WIDTH: usize = 11;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_listing(listing: &ClientListing) {
    let heading = if listing.filter.is_empty() {
        format!("Clients ({})", listing.count)
    } else {
        format!("Clients matching \"{}\" ({})", listing.filter, listing.count)
    };
    println!("{}", heading.bold());

    if listing.clients.is_empty() {
        println!("No clients found.");
        return;
    }

    println!(
        "{}",
        row(["Name", "Email", "Phone", "Goal", "Start", "Id"]).dimmed()
    );
    for client in &listing.clients {
        let f = &client.fields;
        println!(
            "{}",
            row([
                f.full_name.as_str(),
                f.email.as_str(),
                f.phone.as_str(),
                f.goal.as_str(),
                f.start_date.as_str(),
                client.id.as_str(),
            ])
        );
    }
}

fn row(cells: [&str; 6]) -> String {
    let widths = [
        NAME_WIDTH,
        EMAIL_WIDTH,
        PHONE_WIDTH,
        GOAL_WIDTH,
        DATE_WIDTH,
    ];
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&pad_to_width(cell, width));
        line.push(' ');
    }
    // Ids are never truncated so they can be copied into edit/view/delete
    line.push_str(cells[5]);
    line
}

pub fn print_client(client: &ClientRecord) {
    let f = &client.fields;
    println!("{}", f.full_name.bold());
    println!("--------------------------------");
    let phone = if f.phone.is_empty() { "-" } else { f.phone.as_str() };
    let age = f.age.to_string();
    let lines = [
        ("Id", client.id.as_str()),
        ("Email", f.email.as_str()),
        ("Phone", phone),
        ("Age", age.as_str()),
        ("Gender", f.gender.as_str()),
        ("Goal", f.goal.as_str()),
        ("Started", f.start_date.as_str()),
        ("Updated", client.last_updated.as_str()),
    ];
    for (label, value) in lines {
        println!("{}{}", format!("{:<9}", format!("{}:", label)).dimmed(), value);
    }
}

pub fn print_loading(panel: &Enrichment) {
    println!();
    println!("{}", "Suggested exercises".bold());
    println!("{}", panel.note().dimmed());
}

pub fn print_enrichment(panel: &Enrichment) {
    for (i, item) in panel.suggestions().iter().enumerate() {
        println!("{}. {}", i + 1, item.name.yellow());
        println!("   {}", item.description);
    }
    let note = panel.note();
    match panel {
        Enrichment::Success(_) => println!("{}", note.green()),
        _ => println!("{}", note.dimmed()),
    }
}

pub fn print_config(config: &FitcrmConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
