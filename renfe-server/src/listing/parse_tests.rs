//! End-to-end tests for the listing parser.
//!
//! Fixtures are built from row specs rather than pasted page dumps so each
//! test states exactly which markup variation it exercises.

use super::*;
use crate::domain::{Badge, Price, ServiceBrand, TrainOffer};

#[derive(Clone)]
struct FareSpec {
    name: &'static str,
    price: &'static str,
    code: &'static str,
    link: Option<&'static str>,
    features: Vec<&'static str>,
}

fn fare(name: &'static str, price: &'static str, code: &'static str) -> FareSpec {
    FareSpec {
        name,
        price,
        code,
        link: Some("TB"),
        features: vec!["Un equipaje de mano"],
    }
}

#[derive(Clone)]
struct RowSpec {
    id: String,
    brand: Option<&'static str>,
    depart: &'static str,
    arrive: &'static str,
    duration: Option<&'static str>,
    price_from: Option<&'static str>,
    fares: Vec<FareSpec>,
    badges: Vec<&'static str>,
    accessible: bool,
    eco: bool,
}

impl Default for RowSpec {
    fn default() -> Self {
        Self {
            id: "i_1".to_string(),
            brand: Some("AVE"),
            depart: "06:24",
            arrive: "08:49",
            duration: Some("2 horas 25 minutos"),
            price_from: Some("35,30"),
            fares: vec![fare("Básico", "35,30", "MF")],
            badges: Vec::new(),
            accessible: false,
            eco: false,
        }
    }
}

fn fare_html(spec: &FareSpec) -> String {
    let link = spec
        .link
        .map(|link| format!(r#" data-cod-tpenlacesilencio="{link}""#))
        .unwrap_or_default();
    let features: String = spec
        .features
        .iter()
        .map(|feature| format!("<li>{feature}</li>"))
        .collect();
    format!(
        r#"<div class="seleccion-resumen-bottom card" data-precio-tarifa="{price}"
                data-cod-tarifa="{code}"{link}>
             <div class="card-header">
               <span style="padding-right: 8px;">{name}</span>
               <span class="precio">{price} €</span>
             </div>
             <ul>{features}</ul>
           </div>"#,
        price = spec.price,
        code = spec.code,
        name = spec.name,
    )
}

fn row_html(spec: &RowSpec) -> String {
    let brand = spec
        .brand
        .map(|brand| format!(r#"<img src="tren.png" alt="Tipo de tren {brand}">"#))
        .unwrap_or_default();
    let duration = spec
        .duration
        .map(|duration| format!(r#"<span class="text-number">{duration}</span>"#))
        .unwrap_or_default();
    let price = spec
        .price_from
        .map(|price| {
            format!(
                r#"<span class="precio-final" title="Precio desde {price} euros">{price} €</span>"#
            )
        })
        .unwrap_or_default();
    let badges: String = spec
        .badges
        .iter()
        .map(|badge| format!(r#"<span class="badge-amarillo-junto">{badge}</span>"#))
        .collect();
    let mut markers = String::new();
    if spec.accessible {
        markers.push_str("<span>Plaza H disponible</span>");
    }
    if spec.eco {
        markers.push_str("<span>Cero emisiones</span>");
    }
    let info = if markers.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="info-varios">{markers}</div>"#)
    };
    let fares: String = spec.fares.iter().map(fare_html).collect();

    format!(
        r#"<div class="selectedTren" role="listitem" id="tren_{id}">
             {brand}
             <h5 aria-hidden="true">{depart} h</h5>
             <h5 aria-hidden="true">{arrive} h</h5>
             {duration}
             {badges}
             {price}
             {info}
             {fares}
           </div>"#,
        id = spec.id,
        depart = spec.depart,
        arrive = spec.arrive,
    )
}

fn listing_html(rows: &[RowSpec]) -> String {
    let rows: String = rows.iter().map(row_html).collect();
    format!(
        r#"<div class="container box-target-principal"><div role="list">{rows}</div></div>"#
    )
}

fn full_page(listing: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
           <html><head><title>Comprar billetes</title></head>
           <body>
             <nav class="navbar"><a href="/">Inicio</a><a href="/ayuda">Ayuda</a></nav>
             <div class="cabecera-busqueda">Madrid - Barcelona</div>
             {listing}
             <footer class="pie"><p>Condiciones de compra</p></footer>
           </body></html>"#
    )
}

/// Eleven trains with mixed brands and one to three fare tiers each.
fn eleven_rows() -> Vec<RowSpec> {
    let brands = [
        "AVLO", "AVE", "ALVIA", "AVE", "Intercity", "AVE", "AVLO", "MD", "AVE", "AVANT", "AVE",
    ];
    brands
        .iter()
        .enumerate()
        .map(|(index, brand)| {
            let mut fares = vec![fare("Básico", "35,30", "MF")];
            if index % 3 != 0 {
                fares.push(fare("Elige", "52,40", "CF"));
            }
            if index % 3 == 2 {
                fares.push(fare("Prémium", "79,90", "PF"));
            }
            RowSpec {
                id: format!("i_{}", index + 1),
                brand: Some(brand),
                accessible: index % 2 == 0,
                eco: index < 4,
                badges: if index == 0 {
                    vec!["Precio más bajo"]
                } else {
                    Vec::new()
                },
                fares,
                ..RowSpec::default()
            }
        })
        .collect()
}

fn parse(markup: &str) -> ParseReport {
    parse_train_list(markup).expect("listing should parse")
}

#[test]
fn eleven_trains_parse_in_order_with_zero_diagnostics() {
    let report = parse(&listing_html(&eleven_rows()));

    assert_eq!(report.offers.len(), 11);
    assert!(report.diagnostics.is_empty());

    let ids: Vec<_> = report.offers.iter().map(|o| o.train_id.as_str()).collect();
    let expected: Vec<_> = (1..=11).map(|n| format!("i_{n}")).collect();
    assert_eq!(ids, expected);

    assert_eq!(report.offers[0].service_type, ServiceBrand::Avlo);
    assert_eq!(report.offers[2].service_type, ServiceBrand::Alvia);
    assert_eq!(report.offers[4].service_type, ServiceBrand::Intercity);
    assert_eq!(report.offers[7].service_type, ServiceBrand::MediaDistancia);
    assert_eq!(report.offers[9].service_type, ServiceBrand::Avant);
}

#[test]
fn price_from_is_the_minimum_across_fare_tiers() {
    let row = RowSpec {
        fares: vec![
            fare("Básico", "35,30", "MF"),
            fare("Elige", "52,40", "CF"),
            fare("Prémium", "79,90", "PF"),
        ],
        ..RowSpec::default()
    };
    let report = parse(&listing_html(&[row]));

    let offer = &report.offers[0];
    assert_eq!(offer.price_from, Price::from_cents(3530));
    assert_eq!(offer.cheapest_fare(), Some(Price::from_cents(3530)));
    assert!(report.diagnostics.is_empty());

    // Tier order is kept as listed, not re-sorted
    let names: Vec<_> = offer.fares.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Básico", "Elige", "Prémium"]);
}

#[test]
fn accessibility_flag_tracks_icon_presence_per_row() {
    let rows = vec![
        RowSpec {
            id: "i_1".to_string(),
            accessible: true,
            ..RowSpec::default()
        },
        RowSpec {
            id: "i_2".to_string(),
            accessible: false,
            ..RowSpec::default()
        },
    ];
    let report = parse(&listing_html(&rows));

    assert!(report.offers[0].accessible);
    assert!(!report.offers[1].accessible);
}

#[test]
fn eco_flag_tracks_marker_presence_per_row() {
    let rows = vec![
        RowSpec {
            id: "i_1".to_string(),
            eco: true,
            ..RowSpec::default()
        },
        RowSpec {
            id: "i_2".to_string(),
            eco: false,
            ..RowSpec::default()
        },
    ];
    let report = parse(&listing_html(&rows));

    assert!(report.offers[0].eco_friendly);
    assert!(!report.offers[1].eco_friendly);
}

#[test]
fn badges_are_captured_including_unknown_labels() {
    let row = RowSpec {
        badges: vec!["Precio más bajo", "lowest price"],
        ..RowSpec::default()
    };
    let report = parse(&listing_html(&[row]));

    let badges = &report.offers[0].badges;
    assert!(badges.contains(&Badge::LowestPrice));
    assert!(badges.contains(&Badge::Other("lowest price".to_string())));
}

#[test]
fn empty_container_yields_empty_result_not_error() {
    let report = parse(r#"<div class="container box-target-principal"></div>"#);
    assert!(report.offers.is_empty());
    assert!(report.diagnostics.is_empty());
}

#[test]
fn missing_container_is_structure_not_found() {
    let page = r#"<html><body><h1>Lo sentimos</h1><p>Su sesión ha caducado.</p></body></html>"#;
    assert_eq!(parse_train_list(page), Err(StructureNotFound));
}

#[test]
fn row_with_missing_required_field_is_skipped_and_reported() {
    let rows = vec![
        RowSpec {
            id: "i_1".to_string(),
            ..RowSpec::default()
        },
        RowSpec {
            id: "i_2".to_string(),
            price_from: None,
            ..RowSpec::default()
        },
        RowSpec {
            id: "i_3".to_string(),
            ..RowSpec::default()
        },
    ];
    let report = parse(&listing_html(&rows));

    let ids: Vec<_> = report.offers.iter().map(|o| o.train_id.as_str()).collect();
    assert_eq!(ids, ["i_1", "i_3"]);
    assert_eq!(
        report.diagnostics,
        [Diagnostic::RowSkipped {
            row: 1,
            field: "price_from"
        }]
    );
}

#[test]
fn incomplete_fare_card_is_dropped_without_losing_the_train() {
    let mut broken = fare("Elige", "52,40", "CF");
    broken.code = "";
    let row = RowSpec {
        fares: vec![fare("Básico", "35,30", "MF"), broken],
        ..RowSpec::default()
    };
    let report = parse(&listing_html(&[row]));

    assert_eq!(report.offers.len(), 1);
    assert_eq!(report.offers[0].fares.len(), 1);
    assert_eq!(
        report.diagnostics,
        [Diagnostic::FareDropped {
            row: 0,
            train_id: "i_1".to_string(),
            fare: 1,
            field: "code"
        }]
    );
}

#[test]
fn declared_from_price_wins_on_mismatch_but_is_reported() {
    let row = RowSpec {
        price_from: Some("30,00"),
        fares: vec![fare("Básico", "35,30", "MF"), fare("Elige", "52,40", "CF")],
        ..RowSpec::default()
    };
    let report = parse(&listing_html(&[row]));

    // The declared summary stays the user-facing number
    assert_eq!(report.offers[0].price_from, Price::from_cents(3000));
    assert_eq!(
        report.diagnostics,
        [Diagnostic::PriceMismatch {
            row: 0,
            train_id: "i_1".to_string(),
            declared: Price::from_cents(3000),
            cheapest_fare: Price::from_cents(3530),
        }]
    );
}

#[test]
fn row_without_fare_cards_keeps_declared_from_price() {
    let row = RowSpec {
        fares: Vec::new(),
        ..RowSpec::default()
    };
    let report = parse(&listing_html(&[row]));

    let offer = &report.offers[0];
    assert!(offer.fares.is_empty());
    assert_eq!(offer.price_from, Price::from_cents(3530));
    assert!(report.diagnostics.is_empty());
}

#[test]
fn parsing_is_idempotent() {
    let markup = listing_html(&eleven_rows());
    let first = parse(&markup);
    let second = parse(&markup);
    assert_eq!(first, second);
}

#[test]
fn full_page_parses_identically_to_isolated_fragment() {
    let fragment = listing_html(&eleven_rows());
    let page = full_page(&fragment);

    let from_fragment = parse(&fragment);
    let from_page = parse(&page);

    assert_eq!(from_fragment, from_page);
    assert_eq!(from_page.offers.len(), 11);
}

#[test]
fn offers_roundtrip_through_the_json_shape() {
    let report = parse(&listing_html(&eleven_rows()));

    let json = serde_json::to_string(&report.offers).unwrap();
    let back: Vec<TrainOffer> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report.offers);
}

#[test]
fn return_leg_listing_parses_like_outbound() {
    // The fragment format is identical for outbound and return searches;
    // only the row ids differ ("v_" rather than "i_").
    let rows = vec![
        RowSpec {
            id: "v_1".to_string(),
            depart: "18:05",
            arrive: "20:30",
            ..RowSpec::default()
        },
        RowSpec {
            id: "v_2".to_string(),
            depart: "21:15",
            arrive: "23:40",
            ..RowSpec::default()
        },
    ];
    let report = parse(&listing_html(&rows));

    let ids: Vec<_> = report.offers.iter().map(|o| o.train_id.as_str()).collect();
    assert_eq!(ids, ["v_1", "v_2"]);
    assert!(report.diagnostics.is_empty());
}
