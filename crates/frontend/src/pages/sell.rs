//! Crop listing form

use crate::components::Field;
use crate::routes::Route;
use crate::session::use_capabilities;
use agrichain_core::Capability;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Form contents as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CropListing {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub harvest_date: String,
    pub address: String,
}

/// A listing that passed validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidListing {
    pub name: String,
    pub quantity_kg: u32,
    pub price_per_kg: f64,
    pub harvest_date: String,
    pub address: String,
}

impl CropListing {
    pub fn validate(&self) -> Result<ValidListing, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Crop name is required".to_string());
        }

        let quantity_kg = match self.quantity.trim().parse::<u32>() {
            Ok(q) if q > 0 => q,
            _ => return Err("Quantity must be a whole number of kilograms".to_string()),
        };

        let price_per_kg = match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p > 0.0 => p,
            _ => return Err("Price must be a positive amount".to_string()),
        };

        let harvest_date = self.harvest_date.trim();
        if !is_iso_date(harvest_date) {
            return Err("Harvest date must be in YYYY-MM-DD form".to_string());
        }

        let address = self.address.trim();
        if address.is_empty() {
            return Err("Pickup address is required".to_string());
        }

        Ok(ValidListing {
            name: name.to_string(),
            quantity_kg,
            price_per_kg,
            harvest_date: harvest_date.to_string(),
            address: address.to_string(),
        })
    }
}

// What `<input type="date">` produces
fn is_iso_date(value: &str) -> bool {
    let mut parts = value.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let month = m.parse::<u8>().ok();
    let day = d.parse::<u8>().ok();
    y.len() == 4
        && y.parse::<u16>().is_ok()
        && m.len() == 2
        && matches!(month, Some(1..=12))
        && d.len() == 2
        && matches!(day, Some(1..=31))
}

#[function_component(SellPage)]
pub fn sell_page() -> Html {
    let capabilities = use_capabilities();
    let listing = use_state(CropListing::default);
    let outcome = use_state(|| None::<Result<ValidListing, String>>);

    // The route guard already limits this page to sellers
    if !capabilities.contains(Capability::CanSell) {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    let edit = |apply: fn(&mut CropListing, String)| {
        let listing = listing.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*listing).clone();
            apply(&mut next, input.value());
            listing.set(next);
        })
    };

    let on_submit = {
        let listing = listing.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = listing.validate();
            if let Ok(valid) = &result {
                tracing::info!(crop = %valid.name, quantity_kg = valid.quantity_kg, "Crop listing prepared");
            }
            outcome.set(Some(result));
        })
    };

    html! {
        <div class="max-w-lg mx-auto bg-white rounded-lg shadow-lg p-8">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">{"List a crop"}</h2>
            <form onsubmit={on_submit} class="space-y-4">
                <Field id="crop_name" label="Crop name" value={listing.name.clone()} oninput={edit(|l, v| l.name = v)} />
                <Field id="quantity" label="Quantity (kg)" kind="number" value={listing.quantity.clone()} oninput={edit(|l, v| l.quantity = v)} />
                <Field id="price" label="Price per kg" kind="number" value={listing.price.clone()} oninput={edit(|l, v| l.price = v)} />
                <Field id="harvest_date" label="Harvest date" kind="date" value={listing.harvest_date.clone()} oninput={edit(|l, v| l.harvest_date = v)} />
                <Field id="address" label="Pickup address" value={listing.address.clone()} oninput={edit(|l, v| l.address = v)} />
                {
                    match &*outcome {
                        Some(Ok(valid)) => html! {
                            <p class="text-sm text-green-700">
                                { format!(
                                    "{} kg of {} harvested {} at {:.2} per kg, collected from {}, is ready to publish.",
                                    valid.quantity_kg, valid.name, valid.harvest_date, valid.price_per_kg, valid.address
                                ) }
                            </p>
                        },
                        Some(Err(message)) => html! { <p class="text-sm text-red-600">{ message }</p> },
                        None => html! {},
                    }
                }
                <button type="submit" class="w-full py-2 rounded-md text-white bg-green-600 hover:bg-green-700">
                    {"Add listing"}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> CropListing {
        CropListing {
            name: " Maize ".to_string(),
            quantity: "120".to_string(),
            price: "0.45".to_string(),
            harvest_date: "2024-03-18".to_string(),
            address: "Plot 7, Riverside Road".to_string(),
        }
    }

    #[test]
    fn accepts_complete_listing() {
        let valid = listing().validate().unwrap();
        assert_eq!(valid.name, "Maize");
        assert_eq!(valid.quantity_kg, 120);
        assert!((valid.price_per_kg - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_each_bad_field() {
        let cases: [fn(&mut CropListing); 6] = [
            |l| l.name = "  ".into(),
            |l| l.quantity = "0".into(),
            |l| l.quantity = "ten".into(),
            |l| l.price = "-3".into(),
            |l| l.harvest_date = "18/03/2024".into(),
            |l| l.address = String::new(),
        ];

        for case in cases {
            let mut bad = listing();
            case(&mut bad);
            assert!(bad.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn iso_dates() {
        assert!(is_iso_date("2024-12-01"));
        assert!(!is_iso_date("2024-13-01"));
        assert!(!is_iso_date("2024-1-01"));
        assert!(!is_iso_date("2024-01-01-01"));
        assert!(!is_iso_date(""));
    }
}
