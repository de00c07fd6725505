//! Terminal rendering of wizard state.

use colored::Colorize;

use msgwiz_application::WizardSummary;
use msgwiz_core::persona::{CatalogOption, PersonaCatalog};
use msgwiz_core::wizard::{PROGRESS_SEGMENTS, WizardProgress, WizardState};

const SEGMENT_WIDTH: usize = 8;

pub fn progress_bar(progress: &WizardProgress) -> String {
    let segments: Vec<String> = (0..PROGRESS_SEGMENTS)
        .map(|index| {
            let filled = (progress.segment_fill(index) * SEGMENT_WIDTH as f64).round() as usize;
            format!("{}{}", "█".repeat(filled), "░".repeat(SEGMENT_WIDTH - filled))
        })
        .collect();
    format!("{} {:>3}%", segments.join(" "), progress.percent)
}

pub fn print_personas(state: &WizardState) {
    for persona in &state.personas {
        let selected = state.selected_persona_id.as_deref() == Some(persona.id.as_str());
        let marker = if selected { "●" } else { "○" };
        let line = format!("{} {} ({}) - {}", marker, persona.name, persona.id, persona.tone);
        if selected {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{}", line);
        }
        println!("    {}", persona.description.bright_black());
        if !persona.keywords.is_empty() {
            println!("    {}", persona.keywords.join(" ").bright_black());
        }
    }
}

pub fn print_customers(state: &WizardState) {
    if state.customer_list.is_empty() {
        println!("{}", "No customers loaded.".bright_black());
        return;
    }
    for customer in &state.customer_list {
        let selected = state.selected_customer.as_ref().map(|c| c.id.as_str()) == Some(customer.id.as_str());
        let tone = customer.preferred_tone.as_deref().unwrap_or("-");
        let line = format!("{} {} ({}) tone: {}", if selected { "●" } else { "○" }, customer.name, customer.id, tone);
        if selected {
            println!("{}", line.bright_green());
        } else {
            println!("{}", line);
        }
    }
}

fn print_option_row(title: &str, catalog: &[CatalogOption], allowed: &[String], chosen: &[String]) {
    let cells: Vec<String> = allowed
        .iter()
        .map(|id| {
            let label = PersonaCatalog::label_of(catalog, id).unwrap_or(id);
            let cell = format!("{label} [{id}]");
            if chosen.contains(id) {
                cell.bright_green().to_string()
            } else {
                cell
            }
        })
        .collect();
    println!("{} {}", format!("{title:>10}:").bright_yellow(), cells.join(", "));
}

/// Options offered by the active persona, with the current choices highlighted.
pub fn print_options(state: &WizardState, catalog: &PersonaCatalog) {
    let options = &state.active_options;
    let data = &state.simulation_data;
    print_option_row("skin", &catalog.options.skin_types, &options.skin_types, &data.skin_type);
    print_option_row("concerns", &catalog.options.skin_concerns, &options.concerns, &data.skin_concerns);
    print_option_row(
        "tone",
        &catalog.options.tones,
        &options.tones,
        std::slice::from_ref(&data.preferred_tone),
    );
    print_option_row("keywords", &catalog.options.keywords, &options.keywords, &data.keywords);
}

pub fn print_summary(summary: &WizardSummary) {
    println!("{}", "── Summary ──".bright_magenta().bold());
    println!("  Persona   : {}", summary.persona);
    println!("  Intention : {}", summary.intention);
    if let Some(brand) = &summary.brand {
        println!("  Brand     : {}", brand);
    }
    println!("  Channel   : {}", summary.channel);
    println!("  Progress  : {}", progress_bar(&summary.progress));
    if summary.is_generating {
        println!("{}", "  Generating...".yellow());
    } else if summary.can_generate {
        println!("{}", "  Ready: /generate".bright_green());
    }
    if let Some(card) = &summary.result {
        println!("{}", format!("── Result ({}) ──", card.channel).bright_blue().bold());
        for line in card.content.lines() {
            println!("{}", line.bright_blue());
        }
    }
}

pub fn print_help() {
    let rows = [
        ("/personas", "List personas"),
        ("/persona [id]", "Toggle a persona (no id clears)"),
        ("/customers", "List customers"),
        ("/customer [id]", "Select a customer (no id clears)"),
        ("/intention [text]", "Set the campaign intention (no text clears)"),
        ("/brand on|off", "Toggle brand targeting"),
        ("/target <brand>", "Set the target brand"),
        ("/channel [name]", "APP_PUSH, SMS, KAKAO or EMAIL"),
        ("/options", "Show options for the active persona"),
        ("/tone <id>", "Set the preferred tone"),
        ("/skin a,b", "Set skin types"),
        ("/concerns a,b", "Set skin concerns"),
        ("/keywords a,b", "Set keywords"),
        ("/status", "Show the summary"),
        ("/generate", "Generate the message"),
        ("/reset", "Reset every setting"),
        ("/quit", "Exit"),
    ];
    for (command, text) in rows {
        println!("  {} {}", format!("{command:<20}").bright_cyan(), text.bright_black());
    }
}
