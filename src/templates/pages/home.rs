// templates/pages/home.rs

use crate::domain::ListingInput;
use crate::templates::{
    components::{button, card, notice},
    desktop_layout,
};
use maud::{html, Markup};

#[derive(Debug, Clone, Default)]
pub struct HomeVm {
    pub listing: ListingInput,
    pub use_sample: bool,
    /// A server-side key exists, so the key field may be left blank.
    pub server_key: bool,
    pub error: Option<String>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Property Analysis",
        html! {
            h1 { "CRE Deal Finder" }
            p class="muted" {
                "AI-powered analysis of commercial real estate listings, scored on seller motivation, "
                "transaction complexity and property characteristics."
            }

            @if let Some(error) = &vm.error {
                (notice("error", error))
            }

            (card("Property Analysis", listing_form(vm)))
        },
    )
}

fn listing_form(vm: &HomeVm) -> Markup {
    let listing = &vm.listing;
    let key_placeholder = if vm.server_key {
        "sk-... (optional, server key configured)"
    } else {
        "sk-..."
    };

    html! {
        p {
            a class="btn btn-secondary" href="/" { "Enter Manually" }
            " "
            a class="btn btn-secondary" href="/?sample=1" { "Load sample listing" }
        }

        form method="post" action="/analyze" {
            label for="api_key" { "OpenAI API Key" }
            input type="password" id="api_key" name="api_key" placeholder=(key_placeholder) autocomplete="off";

            label for="use_sample" {
                input type="checkbox" id="use_sample" name="use_sample" value="on" checked[vm.use_sample];
                " Use Sample Analysis"
            }

            label for="name" { "Property Name" }
            input type="text" id="name" name="name" value=(listing.name) placeholder="e.g. Retail Strip Center";

            label for="property_type" { "Property Type" }
            input type="text" id="property_type" name="property_type" value=(listing.property_type) placeholder="e.g. Retail, Office, Industrial";

            label for="location" { "Location" }
            input type="text" id="location" name="location" value=(listing.location) placeholder="e.g. Austin, TX";

            label for="price" { "Price" }
            input type="text" id="price" name="price" value=(listing.price) placeholder="e.g. $3,950,000";

            label for="description" { "Listing Description" }
            textarea id="description" name="description" rows="14" required { (listing.description) }

            p { (button("Analyze Property")) }
        }
    }
}
