//! Numbered menus shown by the interactive session.

use std::str::FromStr;

use handset_common::config::Config;

use crate::terminal::print;

pub trait MenuItem: Copy + 'static {
    const ITEMS: &'static [Self];

    fn key(&self) -> usize;
    fn title(&self) -> &'static str;
}

/// Prints a menu as `[key] title` lines, unless the quiet level hides menus.
pub fn show<M: MenuItem>(heading: &str, cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    print::header(heading, cfg.quiet);
    for item in M::ITEMS {
        print::tree_head(item.key(), item.title());
    }
}

fn parse_item<M: MenuItem>(s: &str) -> Result<M, String> {
    let s: &str = s.trim();
    M::ITEMS
        .iter()
        .copied()
        .find(|item| item.key().to_string() == s)
        .ok_or_else(|| format!("Invalid menu item: '{s}'"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    AddPhone,
    ListPhones,
    FindPhones,
    Behavior,
    DeletePhone,
    Exit,
}

impl MenuItem for MainMenu {
    const ITEMS: &'static [Self] = &[
        MainMenu::AddPhone,
        MainMenu::ListPhones,
        MainMenu::FindPhones,
        MainMenu::Behavior,
        MainMenu::DeletePhone,
        MainMenu::Exit,
    ];

    fn key(&self) -> usize {
        match self {
            MainMenu::AddPhone => 1,
            MainMenu::ListPhones => 2,
            MainMenu::FindPhones => 3,
            MainMenu::Behavior => 4,
            MainMenu::DeletePhone => 5,
            MainMenu::Exit => 0,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            MainMenu::AddPhone => "Add a smartphone",
            MainMenu::ListPhones => "List all smartphones",
            MainMenu::FindPhones => "Find smartphones by brand",
            MainMenu::Behavior => "Demonstrate behaviour",
            MainMenu::DeletePhone => "Delete a smartphone",
            MainMenu::Exit => "Exit",
        }
    }
}

impl FromStr for MainMenu {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_item(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorAction {
    AddToBasket,
    RemoveFromBasket,
    YearsSinceRelease,
    Back,
}

impl MenuItem for BehaviorAction {
    const ITEMS: &'static [Self] = &[
        BehaviorAction::AddToBasket,
        BehaviorAction::RemoveFromBasket,
        BehaviorAction::YearsSinceRelease,
        BehaviorAction::Back,
    ];

    fn key(&self) -> usize {
        match self {
            BehaviorAction::AddToBasket => 1,
            BehaviorAction::RemoveFromBasket => 2,
            BehaviorAction::YearsSinceRelease => 3,
            BehaviorAction::Back => 0,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            BehaviorAction::AddToBasket => "Add to basket",
            BehaviorAction::RemoveFromBasket => "Remove from basket",
            BehaviorAction::YearsSinceRelease => "Years since release",
            BehaviorAction::Back => "Back to the main menu",
        }
    }
}

impl FromStr for BehaviorAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_item(s)
    }
}
