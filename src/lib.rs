//! Monthly wifi password rotation: one run joins the network with the stored
//! password, rotates the access point's pre-shared key, stores the new value,
//! rejoins, and announces the result to the team.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod services;
