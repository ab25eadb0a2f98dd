use clap::{Args, Parser, Subcommand};

use crate::api::CatalogClient;
use crate::config::BuchClientConfig;
use crate::error::ApiError;
use crate::models::BookListing;
use crate::pagination::Pagination;
use crate::query::{BuchArt, SearchFilter};
use crate::validate::BookForm;

#[derive(Parser)]
#[command(
    name = "buch-client",
    about = "Search and create books in the Buch catalog",
    version
)]
struct Cli {
    /// Path to a config file (defaults to the standard locations)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query one page of the catalog
    Search(SearchArgs),
    /// Validate a new book and post it to the catalog
    Create(CreateArgs),
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long)]
    titel: Option<String>,
    #[arg(long)]
    isbn: Option<String>,
    /// EPUB, HARDCOVER or PAPERBACK
    #[arg(long)]
    art: Option<String>,
    #[arg(long)]
    rating: Option<u32>,
    #[arg(long)]
    preis: Option<f64>,
    #[arg(long)]
    rabatt: Option<f64>,
    #[arg(long)]
    datum: Option<String>,
    #[arg(long)]
    homepage: Option<String>,
    #[arg(long)]
    javascript: bool,
    #[arg(long)]
    typescript: bool,
    #[arg(long)]
    lieferbar: bool,
    /// One-indexed result page
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[derive(Args)]
struct CreateArgs {
    #[arg(long)]
    titel: String,
    #[arg(long)]
    untertitel: Option<String>,
    /// Comma-separated keyword list
    #[arg(long)]
    autor: Option<String>,
    #[arg(long)]
    isbn: String,
    /// EPUB, HARDCOVER or PAPERBACK
    #[arg(long)]
    art: String,
    #[arg(long, default_value_t = 0.0)]
    preis: f64,
    #[arg(long, default_value_t = 0.0)]
    rabatt: f64,
    #[arg(long, default_value_t = 0)]
    rating: i32,
    /// Publication date, YYYY-MM-DD
    #[arg(long)]
    datum: String,
    #[arg(long)]
    homepage: Option<String>,
    #[arg(long)]
    lieferbar: bool,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = BuchClientConfig::load_with_file(cli.config.as_deref())?;
    let client = CatalogClient::from_config(&config)?;

    match cli.command {
        Command::Search(args) => run_search(&client, &config, args).await,
        Command::Create(args) => run_create(&client, args).await,
    }
}

async fn run_search(
    client: &CatalogClient,
    config: &BuchClientConfig,
    args: SearchArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = SearchFilter {
        titel: args.titel.unwrap_or_default(),
        isbn: args.isbn.unwrap_or_default(),
        art: args.art.as_deref().and_then(BuchArt::parse),
        rating: args.rating,
        preis: args.preis,
        rabatt: args.rabatt,
        datum: args.datum.unwrap_or_default(),
        homepage: args.homepage.unwrap_or_default(),
        javascript: args.javascript,
        typescript: args.typescript,
        lieferbar: args.lieferbar,
    };

    let mut pagination = Pagination::new(config.search.page_size);
    pagination.page = args.page.max(1);

    match client.search(&filter, &pagination).await {
        Ok(page) => {
            for buch in &page.content {
                let listing = BookListing::from(buch);
                println!("{:>6}  {:<17}  {}", listing.id, listing.isbn, listing.titel);
                if let Some(autor) = &listing.autor {
                    println!("        {autor}");
                }
            }
            println!("{} Treffer insgesamt", page.total_elements);
            Ok(())
        }
        Err(ApiError::NotFound) => {
            println!("Keine Bücher gefunden.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn run_create(
    client: &CatalogClient,
    args: CreateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = BookForm {
        titel: args.titel,
        untertitel: args.untertitel.unwrap_or_default(),
        autor: args.autor.unwrap_or_default(),
        isbn: args.isbn,
        preis: args.preis,
        rabatt: args.rabatt,
        art: args.art,
        rating: args.rating,
        homepage: args.homepage.unwrap_or_default(),
        datum: args.datum,
        javascript: false,
        typescript: false,
        lieferbar: args.lieferbar,
    };

    let input = form.to_input()?;
    client.create(&input).await?;
    println!("Buch angelegt: {}", input.isbn);
    Ok(())
}
