//! Mojomint - Main entry point.
//!
//! Thin interactive front-end: it only invokes workflow operations and
//! prints their state. The wallet provider here is the scripted dev
//! wallet; a real deployment plugs a live provider into WalletPort.

use std::io::{BufRead, Write as _};
use std::sync::Arc;

use mojomint_domain::{ChainId, ContractAddress, NarrativePath, WalletAddress};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mojomint_app::app::{App, Ports};
use mojomint_app::infrastructure::{
    clock::{SystemClock, SystemRandom},
    dev_wallet::DevWallet,
    imagegen::ImageGenHttpClient,
    narrative::NarrativeHttpClient,
    pinning::PinningHttpClient,
    reward::RewardHttpClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mojomint=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mojomint");

    // Load configuration
    let narrative_url =
        std::env::var("NARRATIVE_URL").unwrap_or_else(|_| "http://localhost:8787".into());
    let pinning_url =
        std::env::var("PINNING_URL").unwrap_or_else(|_| "http://localhost:8788".into());
    let imagegen_url =
        std::env::var("IMAGEGEN_URL").unwrap_or_else(|_| "http://localhost:8789".into());
    let reward_url =
        std::env::var("REWARD_URL").unwrap_or_else(|_| "http://localhost:8790".into());
    let contract = std::env::var("CONTRACT_ADDRESS")
        .unwrap_or_else(|_| "0x5aeda56215b167893e80b4fe645ba6d5bab767de".into());
    let contract = ContractAddress::parse(&contract)?;
    let required_chain = ChainId(
        std::env::var("REQUIRED_CHAIN_ID")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .unwrap_or(10),
    );
    let default_image = std::env::var("MINT_IMAGE_URI")
        .unwrap_or_else(|_| "ipfs://QmMojoJamCoverArt".into());
    let dev_fee = std::env::var("DEV_MINT_FEE_WEI")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1_000_000_000_000_000u128);

    let wallet = Arc::new(DevWallet::new(required_chain, mojomint_domain::Wei(dev_fee)));

    let app = App::new(
        Ports {
            narrative: Arc::new(NarrativeHttpClient::new(&narrative_url)),
            pin: Arc::new(PinningHttpClient::new(&pinning_url)),
            imagegen: Arc::new(ImageGenHttpClient::new(&imagegen_url)),
            reward: Arc::new(RewardHttpClient::new(&reward_url)),
            wallet,
            clock: Arc::new(SystemClock::new()),
            random: Arc::new(SystemRandom::new()),
        },
        required_chain,
        contract,
        default_image,
    );

    run_repl(&app).await
}

async fn run_repl(app: &App) -> anyhow::Result<()> {
    println!("mojomint - type 'help' for commands");
    let stdin = std::io::stdin();
    let mut connected: Option<WalletAddress> = None;

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "connect" => match WalletAddress::parse(rest) {
                Ok(address) => {
                    match app.orchestrator.ensure_fee(&address).await {
                        Ok(fee) => println!(
                            "connected {address}; mint fee {} native units",
                            fee.to_native_string()
                        ),
                        Err(e) => println!("connected {address}; fee load failed: {e}"),
                    }
                    connected = Some(address);
                }
                Err(e) => println!("{e}"),
            },
            "paths" => {
                for path in NarrativePath::all() {
                    println!("  {} - {}", path.key(), path.label());
                }
            }
            "select" => match (&connected, NarrativePath::from_key(rest)) {
                (None, _) => println!("connect a wallet first"),
                (_, None) => println!("unknown path '{rest}', see 'paths'"),
                (Some(address), Some(path)) => {
                    match app.select_path.execute(address, path).await {
                        Ok(prompt) => println!("{}\n? {prompt}", path.label()),
                        Err(e) => println!("{}", e.user_message()),
                    }
                }
            },
            "answer" => match &connected {
                None => println!("connect a wallet first"),
                Some(address) => match app.submit_answer.execute(address, rest).await {
                    Ok(Some(prompt)) => println!("? {prompt}"),
                    Ok(None) => println!("all prompts answered - 'finalize' when ready"),
                    Err(e) => println!("{}", e.user_message()),
                },
            },
            "finalize" => match &connected {
                None => println!("connect a wallet first"),
                Some(address) => match app.finalize_story.execute(address).await {
                    Ok(text) => println!("--- your story ---\n{text}"),
                    Err(e) => println!("{}", e.user_message()),
                },
            },
            "mint" => mint(app, connected.as_ref(), true).await,
            "quickmint" => mint(app, connected.as_ref(), false).await,
            "reset" => match &connected {
                None => println!("connect a wallet first"),
                Some(address) => match app.reset_story.execute(address).await {
                    Ok(()) => println!("session cleared"),
                    Err(e) => println!("{}", e.user_message()),
                },
            },
            "status" => match &connected {
                None => println!("not connected"),
                Some(address) => match app.orchestrator.attempt(address) {
                    None => println!("no mint attempt yet"),
                    Some(attempt) => {
                        println!("attempt {}: {}", attempt.id(), attempt.status());
                        if let Some(tx) = attempt.tx_hash() {
                            println!("  tx: {tx}");
                        }
                        if let Some(message) = attempt.error_message() {
                            println!("  error: {message}");
                        }
                        if let Some(warning) = attempt.degraded_warning() {
                            println!("  warning: {warning}");
                        }
                    }
                },
            },
            "switch" => match app.guard.switch_to_required().await {
                Ok(()) => println!("switched to chain {}", app.guard.required()),
                Err(e) => println!("switch failed: {e}"),
            },
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', see 'help'"),
        }
    }

    Ok(())
}

async fn mint(app: &App, address: Option<&WalletAddress>, story: bool) {
    let result = if story {
        app.orchestrator.mint_story(address).await
    } else {
        app.orchestrator.confirm(address).await
    };
    match result {
        Ok(outcome) => {
            println!(
                "minted on the {} path (mojo {}, {}) - tx {}",
                outcome.path.label(),
                outcome.mojo,
                outcome.flavor,
                outcome.tx_hash
            );
            if let Some(warning) = &outcome.warning {
                println!("  warning: {warning}");
            }
            if let Some(address) = address {
                if let Some(tx) = app
                    .claim_reward
                    .execute(address, outcome.mojo, outcome.path)
                    .await
                {
                    println!("  reward tokens sent: {tx}");
                }
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }
}

fn print_help() {
    println!(
        "\
commands:
  connect <0xaddress>   connect a wallet and load the mint fee
  paths                 list story paths
  select <A|B|C>        start a story on a path
  answer <text>         answer the current prompt
  finalize              produce the story text
  mint                  mint the finalized story (publishes metadata)
  quickmint             mint without a story (embedded data URI)
  reset                 clear the story session
  status                show the current mint attempt
  switch                ask the wallet to switch to the required chain
  quit"
    );
}
