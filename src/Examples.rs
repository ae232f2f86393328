#![allow(non_snake_case)]
/// runnable demos of the four derivation request kinds
pub mod stepwise_examples;
/// plotting demos: curve with key point overlay, curve export
pub mod plotting_examples;
