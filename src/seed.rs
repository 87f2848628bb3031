//! Example listings inserted into a fresh, empty database.

use crate::model::CarInput;

#[allow(clippy::too_many_arguments)]
fn listing(
    brand: &str,
    model: &str,
    year: i64,
    color: &str,
    price: f64,
    mileage: i64,
    description: &str,
    image_url: &str,
    highlights: &str,
) -> CarInput {
    CarInput {
        brand: Some(brand.into()),
        model: Some(model.into()),
        year: Some(year),
        color: Some(color.into()),
        price: Some(price),
        mileage: Some(mileage),
        description: Some(description.into()),
        image_url: Some(image_url.into()),
        highlights: Some(highlights.into()),
    }
}

pub fn seed_cars() -> Vec<CarInput> {
    vec![
        listing(
            "McLaren",
            "p1",
            2026,
            "Noir",
            45_000_000.0,
            10,
            "Pas de description",
            "https://cdn.motor1.com/images/mgl/o7709/s1/mclaren-p1.jpg",
            "Hypercar",
        ),
        listing(
            "Citroen",
            "c3",
            2015,
            "Grise",
            4_500.0,
            250_000,
            "La voiture du peuple. Attention, elle en a sous le capot",
            "https://cdn.wheel-size.com/automobile/body/citroen-c3-2013-2015-1627380267.7414687.jpg",
            "Légendaire, moteur V12",
        ),
        listing(
            "Renault",
            "Clio 2",
            2003,
            "Blanc",
            800.0,
            350_000,
            "Une carcasse. Ne jouez pas au malin avec le conducteur",
            "https://img.leboncoin.fr/api/v1/lbcpb1/images/64/9f/e0/649fe0857f41fedcc79c37ba04ba109e0eb2d482.jpg?rule=classified-1200x800-webp",
            "Aileron emblématique",
        ),
    ]
}
