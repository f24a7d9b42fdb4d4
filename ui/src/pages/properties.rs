use payloads::{PropertyStatus, responses};
use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{PaginationControls, StatusBadge};
use crate::components::pagination_controls::page_slice;
use crate::csv::{download_csv, properties_csv};
use crate::hooks::use_properties;

/// Client-side listing filters. All active criteria must match (AND).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyFilters {
    /// Case-insensitive substring over address, city, and seller name.
    pub search: String,
    pub status: Option<PropertyStatus>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl PropertyFilters {
    pub fn matches(&self, property: &responses::Property) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let haystacks = [
                property.basic.address.to_lowercase(),
                property.basic.city.to_lowercase(),
                property.seller.name.to_lowercase(),
            ];
            if !haystacks.iter().any(|h| h.contains(&search)) {
                return false;
            }
        }

        if let Some(status) = self.status
            && property.status != status
        {
            return false;
        }

        if let Some(min) = self.min_price
            && property.basic.price < min
        {
            return false;
        }

        if let Some(max) = self.max_price
            && property.basic.price > max
        {
            return false;
        }

        true
    }

    pub fn apply<'a>(
        &self,
        properties: &'a [responses::Property],
    ) -> Vec<&'a responses::Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}

/// A price field left blank (or unparseable) places no bound.
fn parse_price(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[function_component]
pub fn PropertiesPage() -> Html {
    let properties = use_properties();

    let filters = use_state(PropertyFilters::default);
    let page = use_state(|| 0usize);

    let set_filters = {
        let filters = filters.clone();
        let page = page.clone();
        Callback::from(move |next: PropertyFilters| {
            // Changing any criterion jumps back to the first page.
            page.set(0);
            filters.set(next);
        })
    };

    let on_search = {
        let filters = filters.clone();
        let set_filters = set_filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.search = input.value();
            set_filters.emit(next);
        })
    };

    let on_status = {
        let filters = filters.clone();
        let set_filters = set_filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.status = PropertyStatus::ALL
                .into_iter()
                .find(|s| s.label() == select.value());
            set_filters.emit(next);
        })
    };

    let on_min_price = {
        let filters = filters.clone();
        let set_filters = set_filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.min_price = parse_price(&input.value());
            set_filters.emit(next);
        })
    };

    let on_max_price = {
        let filters = filters.clone();
        let set_filters = set_filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.max_price = parse_price(&input.value());
            set_filters.emit(next);
        })
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |p: usize| page.set(p))
    };

    let input_classes = "px-3 py-2 border border-neutral-300 dark:border-neutral-600
                         rounded-md shadow-sm bg-white dark:bg-neutral-700
                         text-sm text-neutral-900 dark:text-neutral-100
                         focus:outline-none focus:ring-2 focus:ring-neutral-500";

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Listings"}
                </h1>
            </div>

            <div class="flex flex-wrap items-end gap-3">
                <input
                    type="text"
                    placeholder="Search address, city, or seller"
                    oninput={on_search}
                    class={classes!(input_classes, "flex-1", "min-w-48")}
                />
                <select onchange={on_status} class={input_classes}>
                    <option value="" selected={filters.status.is_none()}>
                        {"All statuses"}
                    </option>
                    { for PropertyStatus::ALL.iter().map(|s| html! {
                        <option
                            value={s.label()}
                            selected={filters.status == Some(*s)}
                        >
                            {s.label()}
                        </option>
                    }) }
                </select>
                <input
                    type="number"
                    placeholder="Min price"
                    oninput={on_min_price}
                    class={classes!(input_classes, "w-32")}
                />
                <input
                    type="number"
                    placeholder="Max price"
                    oninput={on_max_price}
                    class={classes!(input_classes, "w-32")}
                />
            </div>

            {properties.render("listings", |all, _, _| {
                let filtered = filters.apply(all);
                let mut rows: Vec<responses::Property> =
                    filtered.iter().map(|p| (*p).clone()).collect();
                // Newest submissions first.
                rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

                let on_export = {
                    let rows = rows.clone();
                    Callback::from(move |_| {
                        download_csv("properties.csv", &properties_csv(&rows));
                    })
                };

                html! {
                    <div class="space-y-4">
                        <div class="flex items-center justify-between">
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {format!("{} of {} listings", rows.len(), all.len())}
                            </p>
                            <button
                                onclick={on_export}
                                class="px-3 py-1.5 text-sm font-medium rounded-md border
                                       border-neutral-300 dark:border-neutral-600
                                       text-neutral-700 dark:text-neutral-300
                                       hover:bg-neutral-50 dark:hover:bg-neutral-700"
                            >
                                {"Export CSV"}
                            </button>
                        </div>

                        <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg shadow">
                            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                                <thead>
                                    <tr class="text-left text-xs font-medium uppercase tracking-wider
                                               text-neutral-500 dark:text-neutral-400">
                                        <th class="px-4 py-3">{"Address"}</th>
                                        <th class="px-4 py-3">{"City"}</th>
                                        <th class="px-4 py-3">{"Type"}</th>
                                        <th class="px-4 py-3">{"Price"}</th>
                                        <th class="px-4 py-3">{"Seller"}</th>
                                        <th class="px-4 py-3">{"Status"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                                    { for page_slice(&rows, *page).iter().map(|p| html! {
                                        <tr key={p.id.to_string()}
                                            class="hover:bg-neutral-50 dark:hover:bg-neutral-700/50">
                                            <td class="px-4 py-3 text-sm font-medium
                                                       text-neutral-900 dark:text-neutral-100">
                                                <Link<Route>
                                                    to={Route::PropertyDetail { id: p.id }}
                                                    classes="hover:underline"
                                                >
                                                    {&p.basic.address}
                                                </Link<Route>>
                                            </td>
                                            <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                {&p.basic.city}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                {p.basic.property_type.label()}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                {format!("€{}", p.basic.price)}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                {&p.seller.name}
                                            </td>
                                            <td class="px-4 py-3">
                                                <StatusBadge status={p.status} />
                                            </td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                            if rows.is_empty() {
                                <p class="text-center py-8 text-sm text-neutral-500 dark:text-neutral-400">
                                    {"No listings match the current filters"}
                                </p>
                            }
                        </div>

                        <PaginationControls
                            page={*page}
                            total_rows={rows.len()}
                            on_page={on_page.clone()}
                        />
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use payloads::{
        PropertyBasic, PropertyId, PropertyLocation, PropertyType, SellerRef,
        UserId,
    };
    use uuid::Uuid;

    fn property(
        address: &str,
        city: &str,
        seller: &str,
        status: PropertyStatus,
        price: i64,
    ) -> responses::Property {
        responses::Property {
            id: PropertyId(Uuid::new_v4()),
            status,
            basic: PropertyBasic {
                address: address.to_string(),
                city: city.to_string(),
                county: "Harjumaa".to_string(),
                price: Decimal::new(price, 0),
                rooms: 3,
                bedrooms: 2,
                area_m2: 75.0,
                property_type: PropertyType::Apartment,
            },
            location: PropertyLocation {
                latitude: 59.43,
                longitude: 24.75,
            },
            media: vec![],
            seller: SellerRef {
                seller_id: UserId(Uuid::new_v4()),
                name: seller.to_string(),
                email: "seller@example.com".to_string(),
            },
            rejection_reason: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn search_matches_address_city_and_seller() {
        let rows = vec![
            property("Pikk 1", "Tallinn", "Anu", PropertyStatus::Published, 100_000),
            property("Lai 2", "Tartu", "Mart", PropertyStatus::Published, 90_000),
        ];

        let by_address = PropertyFilters {
            search: "pikk".to_string(),
            ..Default::default()
        };
        assert_eq!(by_address.apply(&rows).len(), 1);

        let by_city = PropertyFilters {
            search: "TARTU".to_string(),
            ..Default::default()
        };
        assert_eq!(by_city.apply(&rows).len(), 1);

        let by_seller = PropertyFilters {
            search: "mart".to_string(),
            ..Default::default()
        };
        assert_eq!(by_seller.apply(&rows).len(), 1);
    }

    #[test]
    fn criteria_combine_with_and() {
        let rows = vec![
            property("Pikk 1", "Tallinn", "Anu", PropertyStatus::Published, 100_000),
            property("Pikk 3", "Tallinn", "Anu", PropertyStatus::InReview, 100_000),
            property("Pikk 5", "Tallinn", "Anu", PropertyStatus::Published, 300_000),
        ];
        let filters = PropertyFilters {
            search: "pikk".to_string(),
            status: Some(PropertyStatus::Published),
            min_price: None,
            max_price: Some(Decimal::new(200_000, 0)),
        };
        let filtered = filters.apply(&rows);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].basic.address, "Pikk 1");
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let rows = vec![property(
            "Pikk 1",
            "Tallinn",
            "Anu",
            PropertyStatus::Published,
            150_000,
        )];
        let filters = PropertyFilters {
            min_price: Some(Decimal::new(150_000, 0)),
            max_price: Some(Decimal::new(150_000, 0)),
            ..Default::default()
        };
        assert_eq!(filters.apply(&rows).len(), 1);
    }

    #[test]
    fn empty_filters_match_everything() {
        let rows = vec![
            property("Pikk 1", "Tallinn", "Anu", PropertyStatus::Sold, 1),
            property("Lai 2", "Tartu", "Mart", PropertyStatus::Rejected, 2),
        ];
        assert_eq!(PropertyFilters::default().apply(&rows).len(), 2);
    }

    #[test]
    fn blank_price_input_places_no_bound() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("  "), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("125000"), Some(Decimal::new(125_000, 0)));
    }
}
