use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use stockboard_core::{
    config, render, BadgeTagRenderer, CoreConfig, FilterableHospitalView, InventoryService,
    StockResult, TagPalette,
};
use stockboard_store::{RestDataSource, Store, ViewDriver};
use stockboard_types::TagId;

#[derive(Parser)]
#[command(name = "stockboard")]
#[command(about = "Hospital stock browser CLI")]
struct Cli {
    /// Fixture data directory (defaults to the nearest fixtures/)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all known tags with their colours
    Tags,
    /// Render hospital cards from local fixtures, optionally narrowed by tags
    List {
        /// Tag identifier to filter by; repeat for AND semantics
        #[arg(long = "tag")]
        tags: Vec<i64>,
    },
    /// Fetch collections from a running stockboard API and render the cards
    Fetch {
        /// Base URL of the stockboard API
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,
        /// Tag identifier to filter by; repeat for AND semantics
        #[arg(long = "tag")]
        tags: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_dir = config::resolve_data_dir(cli.data_dir);
    let service = InventoryService::new(CoreConfig::new(data_dir)?);

    match cli.command {
        Some(Commands::Tags) => {
            let tags = service.load_tags()?;
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                let palette = TagPalette::new();
                for tag in tags {
                    println!(
                        "ID: {}, Label: {}, Colour: {}",
                        tag.id,
                        tag.description,
                        palette.color_for(tag.id)
                    );
                }
            }
        }
        Some(Commands::List { tags }) => {
            list_cards(&service, tags.into_iter().map(TagId).collect())?;
        }
        Some(Commands::Fetch { url, tags }) => {
            fetch_cards(url, tags.into_iter().map(TagId).collect()).await?;
        }
        None => {
            list_cards(&service, vec![])?;
        }
    }

    Ok(())
}

fn list_cards(service: &InventoryService, selected: Vec<TagId>) -> StockResult<()> {
    let mut view = FilterableHospitalView::new();
    view.set_hospitals(service.load_hospitals()?);
    view.set_tags(service.load_tags()?);
    for tag in selected {
        view.toggle_tag(tag);
    }

    print_snapshot(&view);
    Ok(())
}

async fn fetch_cards(url: String, selected: Vec<TagId>) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::new(Arc::new(RestDataSource::new(url)));

    // Subscribe before the driver fires its activation refreshes so neither
    // arrival can be missed.
    let mut hospitals_rx = store.subscribe_hospitals();
    let mut tags_rx = store.subscribe_tags();
    let mut driver = ViewDriver::new(&store);

    hospitals_rx.changed().await?;
    tags_rx.changed().await?;
    driver.apply_pending().await;

    let view = driver.view();
    let mut view = view.lock().await;
    for tag in selected {
        view.toggle_tag(tag);
    }

    print_snapshot(&view);
    Ok(())
}

fn print_snapshot(view: &FilterableHospitalView) {
    let palette = TagPalette::new();
    let renderer = BadgeTagRenderer::new(&palette);
    let snapshot = view.snapshot(&palette, &renderer);
    if snapshot.cards.is_empty() {
        println!("No hospitals found.");
    } else {
        print!("{}", render::render_text(&snapshot));
    }
}
