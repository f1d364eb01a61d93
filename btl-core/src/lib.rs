pub mod authorization;
pub mod db;
pub mod pagination;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use btl_entities::{
        category::*, comment::*, house::*, id::*, like::*, number::*, password::*, room::*,
        time::*, user::*,
    };
}

pub use repositories::Error as RepoError;
