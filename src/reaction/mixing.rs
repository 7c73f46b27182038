//! Tentative tube colour after pouring, before any reaction.

use crate::core::{palette, Color, Reagent};

/// Colour a reagent gives the tube.
///
/// `into_empty` is true when the tube held nothing before this pour.
/// Reagents without an entry leave the current colour as it was.
pub fn mix(current: &Color, reagent: Reagent, into_empty: bool) -> Color {
    let base = if into_empty {
        first_pour(reagent)
    } else {
        later_pour(reagent)
    };
    base.map(Color::solid).unwrap_or_else(|| current.clone())
}

fn first_pour(reagent: Reagent) -> Option<&'static str> {
    match reagent {
        Reagent::Benedicts => Some(palette::BLUE),
        Reagent::Iodine => Some(palette::ORANGE_BROWN),
        Reagent::BiuretA => Some(palette::PALE_BLUE),
        Reagent::BiuretB => Some(palette::BLUE),
        Reagent::Ethanol => Some(palette::TRANSPARENT),
        Reagent::Water => None,
        sample => sample.is_sample().then_some(palette::SAMPLE),
    }
}

fn later_pour(reagent: Reagent) -> Option<&'static str> {
    match reagent {
        Reagent::Benedicts => Some(palette::LIGHT_BLUE),
        // Iodine stays orange-brown until it reacts.
        Reagent::Iodine => Some(palette::ORANGE_BROWN),
        Reagent::BiuretB => Some(palette::LIGHT_BLUE),
        _ => None,
    }
}
