use std::{path::PathBuf, time::Duration};

use btl_core::pagination::PageLimits;
use rocket::{
    config::Config as RocketCfg,
    fs::{FileServer, Options},
    Rocket, Route,
};

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
pub mod jwt;


use guards::Db;

/// Directory below the upload directory that holds the user avatars.
pub const AVATAR_DIR: &str = "avatars";

/// Mount point of the uploaded files.
pub const MEDIA_MOUNT: &str = "/media";

#[derive(Debug, Clone)]
pub struct Cfg {
    pub upload_dir: PathBuf,
    pub page_limits: PageLimits,
    pub token_valid_for: Duration,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(options: InstanceOptions, db: Db) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    let avatar_dir = cfg.upload_dir.join(AVATAR_DIR);
    if let Err(err) = std::fs::create_dir_all(&avatar_dir) {
        error!(
            "Unable to create upload directory {}: {err}",
            avatar_dir.display()
        );
    }
    let media = FileServer::new(&cfg.upload_dir, Options::Missing);
    let jwt_state = jwt::JwtState::new(cfg.token_valid_for);

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(cfg)
        .manage(guards::Version(version))
        .mount(MEDIA_MOUNT, media);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(db: Db, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
