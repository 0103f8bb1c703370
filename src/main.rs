//! Iris Energy console
//!
//! Interactive front end for the assistant: free-form chat, scripted
//! conversation replay, market and provider browsing, and first-run
//! onboarding.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use iris_energy::assistant::session::{ChatSession, SessionConfig, SessionEvent};
use iris_energy::catalog::chats::{quick_actions, recent_chats};
use iris_energy::catalog::flows::flows_for;
use iris_energy::catalog::market::{energy_assets, search_assets};
use iris_energy::catalog::providers::{electricity_providers, find_provider};
use iris_energy::onboarding::documents::MarketRole;
use iris_energy::onboarding::verification::StaticCodeVerifier;
use iris_energy::onboarding::wizard::{OnboardingStep, OnboardingWizard};
use iris_energy::storage::settings::{load_settings, save_settings, SUPPORTED_LANGUAGES};
use iris_energy::system::browser::{Browser, SystemBrowser};
use iris_energy::types::message::{Message, Sender};

#[tokio::main]
async fn main() {
    // Setup logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut settings = load_settings();
    let (mut session, events) = ChatSession::new(SessionConfig {
        language: settings.language.clone(),
        response_delay_ms: settings.response_delay_ms,
        flow_message_delay_ms: settings.flow_message_delay_ms,
    });
    spawn_event_printer(events);

    let browser = SystemBrowser;

    println!("Iris Energy assistant. Type /help for commands.");
    if !settings.onboarded {
        println!("First run? /onboard walks you through setup.");
    }

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        let Some(rest) = line.strip_prefix('/') else {
            session.send(&line).await;
            continue;
        };

        let mut parts = rest.splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "help" => print_help(),
            "new" => {
                session.new_chat().await;
                let actions = quick_actions();
                let labels: Vec<&str> = actions.iter().map(|a| a.label.as_str()).collect();
                println!("Quick actions: {}", labels.join(", "));
            }
            "flows" => {
                for flow in flows_for(session.language()) {
                    println!("  {:<28} {}", flow.id, flow.title);
                }
            }
            "play" => {
                if !session.play_flow(argument).await {
                    println!("No such conversation: {}", argument);
                }
            }
            "load" => {
                if !session.load_flow(argument).await {
                    println!("No such conversation: {}", argument);
                }
            }
            "market" => {
                let assets = if argument.is_empty() {
                    energy_assets()
                } else {
                    search_assets(argument)
                };
                if assets.is_empty() {
                    println!("No assets match: {}", argument);
                }
                for asset in assets {
                    println!(
                        "  {:<8} {:<26} ₹{:.2}/kWh  {:+.2} ({:+.2}%)",
                        asset.symbol, asset.name, asset.price, asset.change, asset.change_percent
                    );
                }
            }
            "providers" => {
                for provider in electricity_providers() {
                    println!("  {:<6} {} ({})", provider.id, provider.full_name, provider.region);
                }
                println!("Use /visit <id> to open a provider account page.");
            }
            "visit" => match find_provider(argument) {
                Some(provider) => {
                    if let Err(e) = browser.open(&provider.website).await {
                        println!("Could not open {}: {}", provider.website, e);
                    }
                }
                None => println!("Unknown provider: {}", argument),
            },
            "recent" => {
                for chat in recent_chats() {
                    println!("  {:<24} {:<12} /play {}", chat.title, chat.last_active, chat.flow_id);
                }
            }
            "onboard" => {
                if let Some(language) = run_onboarding(&mut lines).await {
                    settings.language = language;
                    settings.onboarded = true;
                    settings.validate();
                    if let Err(e) = save_settings(&settings) {
                        tracing::warn!("Failed to save settings: {}", e);
                    }

                    // Swap in a session speaking the chosen language
                    session.close();
                    let (fresh, events) = ChatSession::new(SessionConfig {
                        language: settings.language.clone(),
                        response_delay_ms: settings.response_delay_ms,
                        flow_message_delay_ms: settings.flow_message_delay_ms,
                    });
                    session = fresh;
                    spawn_event_printer(events);
                }
            }
            "quit" | "exit" => break,
            other => println!("Unknown command: /{}", other),
        }
    }

    session.close();
    tracing::info!("Goodbye");
}

/// Print session events as they arrive
fn spawn_event_printer(mut events: tokio::sync::mpsc::Receiver<SessionEvent>) {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::MessageAppended { message } => print_message(&message),
                SessionEvent::Replaced { messages } => {
                    for message in &messages {
                        print_message(message);
                    }
                }
                SessionEvent::Cleared => println!("--- new conversation ---"),
                SessionEvent::FlowFinished { flow_id } => {
                    tracing::debug!("Conversation {} finished", flow_id);
                }
            }
        }
    });
}

fn print_message(message: &Message) {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Assistant => "iris",
    };
    println!("[{}] {}", who, message.text);
    if let Some(options) = &message.options {
        for option in options {
            println!("       - {}", option.label);
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /new              start a new conversation");
    println!("  /flows            list scripted conversations");
    println!("  /play <id>        replay a conversation line by line");
    println!("  /load <id>        load a conversation instantly");
    println!("  /market [query]   browse energy assets");
    println!("  /providers        list electricity providers");
    println!("  /visit <id>       open a provider account page");
    println!("  /recent           recent conversations");
    println!("  /onboard          run first-time setup");
    println!("  /quit             exit");
    println!("Anything else is sent to the assistant.");
}

/// Walk the user through first-run setup. Returns the chosen language,
/// or None if stdin closed mid-wizard.
async fn run_onboarding(lines: &mut Lines<BufReader<Stdin>>) -> Option<String> {
    let mut wizard = OnboardingWizard::new(Arc::new(StaticCodeVerifier::default()));

    loop {
        match wizard.step() {
            OnboardingStep::Language => {
                println!("Language ({}):", SUPPORTED_LANGUAGES.join("/"));
                let line = next_line(lines).await?;
                if let Err(e) = wizard.choose_language(line.trim()) {
                    println!("{}", e);
                }
            }
            OnboardingStep::Phone => {
                println!("Phone number (10 digits):");
                let line = next_line(lines).await?;
                if let Err(e) = wizard.submit_phone(&line) {
                    println!("{}", e);
                }
            }
            OnboardingStep::Otp => {
                println!("One-time code:");
                let line = next_line(lines).await?;
                if let Err(e) = wizard.submit_code(&line).await {
                    println!("{}", e);
                }
            }
            OnboardingStep::Profile => {
                println!("Your name:");
                let name = next_line(lines).await?;
                println!("Email (blank to skip):");
                let email = next_line(lines).await?;
                let email = Some(email.as_str()).filter(|email| !email.trim().is_empty());
                if let Err(e) = wizard.submit_profile(&name, email) {
                    println!("{}", e);
                }
            }
            OnboardingStep::Role => {
                for role in [MarketRole::Buyer, MarketRole::Seller, MarketRole::Prosumer] {
                    println!("  {:<10} {}", role.title(), role.description());
                }
                println!("Role (buyer/seller/prosumer):");
                let line = next_line(lines).await?;
                let role = MarketRole::parse(&line);
                if let Err(e) = wizard.choose_role(role) {
                    println!("{}", e);
                }
            }
            OnboardingStep::Verification => {
                let missing = wizard
                    .checklist()
                    .map(|checklist| checklist.missing().join(", "))
                    .unwrap_or_default();
                println!("Still required: {}", missing);
                println!("Upload which credential? (or 'done'):");
                let line = next_line(lines).await?;
                let line = line.trim();
                if line == "done" {
                    if let Err(e) = wizard.finish() {
                        println!("{}", e);
                    }
                } else {
                    match wizard.upload_document(line) {
                        Ok(true) => println!("Uploaded {}", line),
                        Ok(false) => println!("Not recorded (already uploaded or not required)"),
                        Err(e) => println!("{}", e),
                    }
                }
            }
            OnboardingStep::Complete => {
                if let Some(profile) = wizard.profile() {
                    println!("Welcome to Iris Energy, {}!", profile.name);
                }
                return wizard.language().map(str::to_string);
            }
        }
    }
}

async fn next_line(lines: &mut Lines<BufReader<Stdin>>) -> Option<String> {
    lines.next_line().await.ok().flatten()
}
