#![allow(warnings)]
//! Kotobako Frontend Entry Point

mod app;
mod array;
mod categories;
mod clipboard;
mod components;
mod context;
mod date;
mod dom;
mod favorites;
mod long_press;
mod models;
mod scroll;
mod search;
mod sort;
mod storage;
mod store;
mod toast;
mod url;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
