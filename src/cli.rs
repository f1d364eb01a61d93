use std::path::PathBuf;

use anyhow::Result;
use btl_core::{entities::Id, usecases};
use btl_db_sqlite::Connections;
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "btl", version, about = "Real-estate listing backend")]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the web server (default)
    Serve,
    /// Create a new category
    AddCategory { name: String },
    /// Create a new house
    AddHouse {
        name: String,
        address: String,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Create a new room within a house
    AddRoom {
        house: i64,
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Attach a number to a room
    AddNumber { room: i64, value: String },
}

pub async fn run(args: Args, cfg: Config) -> Result<()> {
    let Config {
        db,
        webserver,
        uploads,
    } = cfg;
    let db_url = args.db_url.unwrap_or(db.conn_sqlite);
    log::info!(
        "Connecting to SQLite database '{db_url}' (pool size = {})",
        db.conn_pool_size
    );
    let connections = Connections::init(&db_url, db.conn_pool_size)?;
    btl_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = btl_webserver::Cfg {
                upload_dir: uploads.dir,
                page_limits: webserver.page_limits,
                token_valid_for: webserver.token_valid_for,
            };
            btl_webserver::run(
                connections,
                args.enable_cors || webserver.enable_cors,
                web_cfg,
                env!("CARGO_PKG_VERSION"),
            )
            .await;
        }
        cmd => administrate(&connections, cmd)?,
    }
    Ok(())
}

fn administrate(connections: &Connections, cmd: Command) -> Result<()> {
    let mut db = connections.exclusive()?;
    match cmd {
        Command::Serve => unreachable!(),
        Command::AddCategory { name } => {
            let category = db.transaction(|db| usecases::create_category(db, &name))?;
            println!("Created category {} ({})", category.id, category.name);
        }
        Command::AddHouse {
            name,
            address,
            category,
            description,
        } => {
            let input = usecases::NewHouseInput {
                category_id: category.map(Id::new),
                name,
                address,
                description,
            };
            let house = db.transaction(|db| usecases::create_house(db, input))?;
            println!("Created house {} ({})", house.id, house.address);
        }
        Command::AddRoom {
            house,
            name,
            description,
        } => {
            let room = db.transaction(|db| {
                usecases::create_room(db, Id::new(house), name, description)
            })?;
            println!("Created room {} in house {}", room.id, room.house_id);
        }
        Command::AddNumber { room, value } => {
            let number =
                db.transaction(|db| usecases::add_room_number(db, Id::new(room), &value))?;
            println!("Attached number {} to room {room}", number.value);
        }
    }
    Ok(())
}
