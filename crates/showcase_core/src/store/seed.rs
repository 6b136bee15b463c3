//! Fixture records loaded at process start.
//!
//! Seed ids are the small integers `"1"`, `"2"`, ... so demo links stay
//! stable across restarts; created records get UUIDs and never collide.

use super::{Collection, StoreResult, PORTFOLIOS, PROPERTIES};
use crate::model::portfolio::{
    Blog, NewPortfolio, Portfolio, PortfolioItem, Service, Socials, Testimonial,
};
use crate::model::property::{Coordinates, NewProperty, Property, PropertyType};
use chrono::{DateTime, Utc};

const UNSPLASH: &str = "https://images.unsplash.com";

pub const SEED_PROPERTY_COUNT: usize = 8;
pub const SEED_PORTFOLIO_COUNT: usize = 2;

/// Builds the seeded property collection, all stamped with `at`.
pub fn seed_properties(at: DateTime<Utc>) -> StoreResult<Collection<Property>> {
    let listings = [
        listing(
            "Plot",
            PropertyType::Plot,
            "Pune",
            250_000.0,
            "A large plot of land available for development.",
            "photo-1560518883-ce09059eeffa",
            (18.5204, 73.8567),
            &["Development Ready", "Clear Title", "Road Access"],
        ),
        listing(
            "Shed",
            PropertyType::Shed,
            "Bangalore",
            75_000.0,
            "An industrial shed for manufacturing or storage.",
            "photo-1586023492125-27b2c045efd7",
            (12.9716, 77.5946),
            &["High Ceiling", "Loading Dock", "Power Supply"],
        ),
        listing(
            "Retail Store",
            PropertyType::RetailStore,
            "Kolkata",
            180_000.0,
            "A commercial unit space in a city center.",
            "photo-1441986300917-64674bd600d8",
            (22.5726, 88.3639),
            &["High Footfall", "AC", "Parking"],
        ),
        listing(
            "Plot Store",
            PropertyType::PlotStore,
            "Chennai",
            300_000.0,
            "A spacious plot situated in prime area for development.",
            "photo-1582407947304-fd86f028f716",
            (13.0827, 80.2707),
            &["Corner Plot", "Metro Connectivity", "School Nearby"],
        ),
        listing(
            "Shed",
            PropertyType::Shed,
            "Mumbai",
            120_000.0,
            "Industrial space with all facilities.",
            "photo-1541976590-713941681591",
            (19.0760, 72.8777),
            &["24/7 Security", "Fire Safety", "Crane Facility"],
        ),
        listing(
            "Retail Store",
            PropertyType::RetailStore,
            "Kolkata",
            175_000.0,
            "Premium retail space in commercial hub.",
            "photo-1555529669-2269763671c0",
            (22.5726, 88.3639),
            &["Mall Location", "Brand Presence", "Food Court Access"],
        ),
        listing(
            "Plot",
            PropertyType::Plot,
            "Jaipur",
            160_000.0,
            "A beautiful plot in scenic area.",
            "photo-1516156008625-3a9d6067fab5",
            (26.9124, 75.7873),
            &["Scenic View", "Peaceful", "Investment Potential"],
        ),
        listing(
            "Plot Store",
            PropertyType::PlotStore,
            "Jaipur",
            200_000.0,
            "Large plot of land available for development purposes.",
            "photo-1558618666-fcd25c85cd64",
            (26.9124, 75.7873),
            &["Heritage Zone", "Tourism Potential", "Government Approved"],
        ),
    ];

    let records = listings
        .into_iter()
        .enumerate()
        .map(|(index, input)| Property::with_id((index + 1).to_string(), at, input))
        .collect();
    Collection::with_records(PROPERTIES, records)
}

/// Builds the seeded portfolio collection, all stamped with `at`.
pub fn seed_portfolios(at: DateTime<Utc>) -> StoreResult<Collection<Portfolio>> {
    let flight_instructor = NewPortfolio {
        template_id: "template-1".to_string(),
        name: "Emma Foster".to_string(),
        title: "Flight Instructor".to_string(),
        tagline: "Certified flight instructor specializing in comprehensive drone pilot training"
            .to_string(),
        profile_image: image("photo-1494790108755-2616b612b494", 400, 400),
        bio: "Experienced flight instructor with over 8 years in aviation training. \
              Specializing in drone operations, safety protocols, and comprehensive pilot education."
            .to_string(),
        email: "emma.foster@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "Miami, FL".to_string(),
        socials: Socials::from_iter([
            ("linkedin", "https://linkedin.com/in/emmafoster"),
            ("github", "https://github.com/emmafoster"),
            ("website", "https://emmafoster.com"),
        ]),
        skills: strings(&[
            "Pilot Training",
            "Safety Protocols",
            "Drone Operations",
            "Aviation Law",
            "Emergency Procedures",
        ]),
        services: vec![
            service(
                "Private Pilot Training",
                "One-on-one flight instruction tailored to individual learning pace and goals.",
            ),
            service(
                "Commercial Drone Certification",
                "Complete preparation for commercial drone pilot certification exams.",
            ),
            service(
                "Safety Protocol Training",
                "Comprehensive safety training for professional drone operations.",
            ),
        ],
        portfolio_items: vec![
            item(
                "Commercial Pilot Certification Program",
                "photo-1436491865332-7a61a109cc05",
                "Developed comprehensive training program for commercial drone pilots.",
            ),
            item(
                "Safety Training Curriculum",
                "photo-1559827260-dc66d52bef19",
                "Created industry-standard safety protocols and training materials.",
            ),
            item(
                "Flight Simulation Platform",
                "photo-1581833971358-2c8b550f87b3",
                "Integrated virtual training with hands-on flight experience.",
            ),
        ],
        testimonials: vec![
            testimonial(
                "John Smith",
                "Commercial Pilot",
                "SkyTech Drones",
                "Emma's training was exceptional. Her attention to detail and safety focus \
                 gave me confidence in commercial operations.",
            ),
            testimonial(
                "Sarah Johnson",
                "Flight Operations Manager",
                "AerialPro",
                "The best instructor I've worked with. Professional, knowledgeable, and patient.",
            ),
        ],
        blog: Some(Blog {
            title: "The Future of Drone Training".to_string(),
            summary: "Exploring emerging technologies and methodologies in modern aviation \
                      education."
                .to_string(),
        }),
        contact_message: "Ready to take your piloting skills to the next level? \
                          Let's discuss your training goals."
            .to_string(),
    };

    let software_engineer = NewPortfolio {
        template_id: "template-2".to_string(),
        name: "Kevin Brown".to_string(),
        title: "Software Engineer".to_string(),
        tagline: "Backend engineer building scalable drone fleet management and cloud \
                  architectures"
            .to_string(),
        profile_image: image("photo-1507003211169-0a1dd7228f2d", 400, 400),
        bio: "Full-stack software engineer with expertise in cloud architectures, drone fleet \
              management systems, and scalable backend solutions."
            .to_string(),
        email: "kevin.brown@example.com".to_string(),
        phone: "+1 (555) 987-6543".to_string(),
        location: "Seattle, WA".to_string(),
        socials: Socials::from_iter([
            ("linkedin", "https://linkedin.com/in/kevinbrown"),
            ("github", "https://github.com/kevinbrown"),
            ("website", "https://kevinbrown.dev"),
        ]),
        skills: strings(&[
            "Backend Development",
            "Cloud Architecture",
            "Drone Fleet Management",
            "API Design",
            "Database Design",
        ]),
        services: vec![
            service(
                "Cloud Architecture Design",
                "Scalable cloud solutions for drone operations and data management.",
            ),
            service(
                "Fleet Management Systems",
                "Custom software for managing large-scale drone operations.",
            ),
            service(
                "API Development",
                "RESTful APIs and microservices for drone applications.",
            ),
        ],
        portfolio_items: vec![
            item(
                "Drone Fleet Dashboard",
                "photo-1551288049-bebda4e38f71",
                "Real-time monitoring and management system for enterprise drone fleets.",
            ),
            item(
                "Cloud Data Pipeline",
                "photo-1558494949-ef010cbdcc31",
                "Automated data processing pipeline for drone sensor data.",
            ),
            item(
                "Flight Analytics Platform",
                "photo-1460925895917-afdab827c52f",
                "Advanced analytics and reporting for flight operations.",
            ),
        ],
        testimonials: vec![testimonial(
            "Lisa Chen",
            "CTO",
            "DroneLogistics",
            "Kevin's technical expertise transformed our operations. His solutions are both \
             innovative and practical.",
        )],
        blog: None,
        contact_message: "Looking to scale your drone operations with cutting-edge technology? \
                          Let's build something amazing together."
            .to_string(),
    };

    let records = [flight_instructor, software_engineer]
        .into_iter()
        .enumerate()
        .map(|(index, input)| Portfolio::with_id((index + 1).to_string(), at, input))
        .collect();
    Collection::with_records(PORTFOLIOS, records)
}

#[allow(clippy::too_many_arguments)]
fn listing(
    name: &str,
    kind: PropertyType,
    location: &str,
    price: f64,
    description: &str,
    photo: &str,
    (lat, lng): (f64, f64),
    features: &[&str],
) -> NewProperty {
    NewProperty {
        name: name.to_string(),
        kind,
        location: location.to_string(),
        price,
        description: description.to_string(),
        image: Some(image(photo, 600, 400)),
        coordinates: Some(Coordinates { lat, lng }),
        features: Some(strings(features)),
    }
}

fn image(photo: &str, width: u32, height: u32) -> String {
    let crop = if width == height { "&crop=face" } else { "" };
    format!("{UNSPLASH}/{photo}?w={width}&h={height}&fit=crop{crop}")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn item(title: &str, photo: &str, description: &str) -> PortfolioItem {
    PortfolioItem {
        title: title.to_string(),
        image: image(photo, 600, 400),
        description: description.to_string(),
    }
}

fn testimonial(name: &str, role: &str, company: &str, quote: &str) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        quote: quote.to_string(),
    }
}
