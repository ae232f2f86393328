#![allow(non_snake_case)]
/// plotting of sampled curves with key point overlays (PNG via plotters)
pub mod plots;
/// saving sampled curve data to tab-separated and csv files
pub mod logger;
