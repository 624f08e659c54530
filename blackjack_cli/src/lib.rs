//! Console front end for a round of blackjack. Provides the command line, logging setup,
//!  a console `DecisionProvider`, plain and ascii renderings of hands, round summaries and the scripted demo.

pub mod cli;
pub mod config;
pub mod demo;
pub mod input;
pub mod logging;
pub mod render;
pub mod summary;
pub mod view;
