use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use recommend_form::{
    dom::Document, logging, page, services::HttpBackend, Config, RecommendForm, SubmitOptions,
    SubmitOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "recommend-form", about = "Submit the customer recommendation form")]
struct Args {
    /// Backend base URL; overrides RECOMMEND_BACKEND_URL
    #[arg(long)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the form, submit it once and print the results container
    Submit {
        #[arg(long)]
        customer_id: String,
        /// Raw text of the top_n field; defaults to the configured count
        #[arg(long, allow_hyphen_values = true)]
        top_n: Option<String>,
        /// Print the whole page instead of just the results
        #[arg(long)]
        page: bool,
    },
    /// Print the empty form page
    Page,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(url) = args.backend_url {
        config.backend_url = url;
    }

    let document = Document::new(config.default_top_n);

    match args.command {
        Command::Page => {
            print!("{}", page::render_index_page(&document));
        }
        Command::Submit {
            customer_id,
            top_n,
            page,
        } => {
            document.customer_id.set_value(customer_id);
            if let Some(top_n) = top_n {
                document.top_n.set_value(top_n);
            }

            tracing::info!(backend_url = %config.backend_url, "Submitting recommendation form");

            let backend = Arc::new(HttpBackend::new(&config.backend_url));
            let form = Arc::new(RecommendForm::for_document(
                &document,
                backend,
                SubmitOptions::from(&config),
            ));

            let dispatched = form.dispatch_submit();
            tracing::debug!(submission_id = %dispatched.submission_id, "Submit event dispatched");
            let outcome = dispatched
                .task
                .await
                .context("Submit listener task panicked")?
                .context("Recommendation request failed")?;

            if let SubmitOutcome::DiscardedStale(_) = outcome {
                tracing::warn!("Response discarded as stale");
            }

            if page {
                print!("{}", page::render_index_page(&document));
            } else {
                println!("{}", document.results.content());
            }
        }
    }

    Ok(())
}
