//! Sample content used when a storage key has never been written (or cannot
//! be decoded).

use crate::models::{
    AboutData, Booking, BookingStatus, Faq, GalleryImage, Inquiry, InquiryStatus, Service,
    SiteSettings, TeamMember, Testimonial, TestimonialStatus, TrustedHtml,
};

pub const COMPANY_NAME: &str = "M.K Event Management";
pub const PHONE_NUMBER: &str = "+91 98399 87117";
pub const EMAIL_ADDRESS: &str = "info@mkevents.com";
pub const ADDRESS: &str = "123, Royal Plaza, Main Street, City Center, India";

#[allow(clippy::too_many_arguments)]
fn inquiry(
    id: i64,
    name: &str,
    phone: &str,
    email: &str,
    event_type: &str,
    date: &str,
    city: &str,
    status: InquiryStatus,
    message: &str,
) -> Inquiry {
    Inquiry {
        id,
        name: name.into(),
        phone: phone.into(),
        email: email.into(),
        event_type: event_type.into(),
        date: date.into(),
        city: city.into(),
        status,
        message: Some(message.into()),
    }
}

pub fn default_inquiries() -> Vec<Inquiry> {
    vec![
        inquiry(1, "Amit Patel", "+91 9876543210", "amit@test.com", "Wedding", "2024-12-25", "Mumbai", InquiryStatus::New, "Looking for full wedding planning."),
        inquiry(2, "Sneha Roy", "+91 9123456789", "sneha@test.com", "Birthday", "2024-11-15", "Pune", InquiryStatus::Contacted, "Daughter's 1st birthday."),
        inquiry(3, "John Doe", "+91 9988776655", "john@corp.com", "Corporate", "2024-10-30", "Delhi", InquiryStatus::Converted, "Annual tech meet."),
    ]
}

pub fn default_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: 101,
            client: "Rajesh Kumar".into(),
            event: "Wedding Reception".into(),
            date: "2024-12-10".into(),
            guests: 500,
            budget: "5L - 8L".into(),
            status: BookingStatus::Quoted,
        },
        Booking {
            id: 102,
            client: "Tech Solutions Inc".into(),
            event: "Annual Gala".into(),
            date: "2024-11-25".into(),
            guests: 200,
            budget: "2L - 3L".into(),
            status: BookingStatus::Confirmed,
        },
    ]
}

fn service(id: &str, title: &str, short: &str, full: &str, features: [&str; 4], icon: &str) -> Service {
    Service {
        id: id.into(),
        title: title.into(),
        short_description: short.into(),
        full_description: full.into(),
        features: features.iter().map(|f| f.to_string()).collect(),
        icon_name: icon.into(),
        image: None,
        category: None,
    }
}

pub fn default_services() -> Vec<Service> {
    vec![
        service(
            "wedding",
            "Wedding Planning",
            "Complete wedding management from venue to vidai.",
            "We turn your dream wedding into reality. Our comprehensive wedding planning services cover everything from venue selection to guest management, ensuring a seamless and royal experience.",
            ["Venue Selection", "Decor & Theme", "Guest Management", "Photography"],
            "HeartHandshake",
        ),
        service(
            "birthday",
            "Birthday Parties",
            "Magical themes for kids and adults alike.",
            "Celebrate your special day with joy and style. Whether it's a first birthday or a 50th jubilee, we create magical atmospheres with balloons, themes, and entertainment.",
            ["Theme Decor", "Cake & Catering", "Entertainment", "Return Gifts"],
            "Cake",
        ),
        service(
            "corporate",
            "Corporate Events",
            "Professional setups for conferences and meets.",
            "Elevate your business image with our professional corporate event services. We handle seminars, conferences, product launches, and annual parties with precision.",
            ["Audio/Visual Setup", "Branding", "Corporate Catering", "Logistics"],
            "Briefcase",
        ),
        service(
            "decor",
            "Decoration Services",
            "Floral, Balloon, and Stage decorations.",
            "Our core expertise lies in transforming spaces. From elegant floral arrangements to grand stage setups, we make every corner photogenic.",
            ["Flower Decor", "Stage Lighting", "Entrance Arches", "Table Centerpieces"],
            "Gem",
        ),
        service(
            "catering",
            "Catering Management",
            "Delicious menus for all palates.",
            "Food is the soul of any event. We partner with top chefs to provide hygienic, tasty, and diverse menu options for your guests.",
            ["Buffet Setup", "Live Stations", "Waitstaff", "Custom Menus"],
            "Utensils",
        ),
        service(
            "sound",
            "DJ & Sound System",
            "High-quality audio and lighting setup.",
            "Get the party started with our premium sound systems and professional DJs. We ensure crystal clear audio and dazzling dance floor lighting.",
            ["Pro Sound System", "DJ Services", "Dance Floor", "Mood Lighting"],
            "Music",
        ),
    ]
}

pub fn default_gallery() -> Vec<GalleryImage> {
    [
        (1, "wedding", "Royal Wedding Stage"),
        (2, "birthday", "Kids Theme Party"),
        (3, "corporate", "Conference Hall"),
        (4, "wedding", "Floral Mandap"),
        (5, "birthday", "Balloon Arch"),
        (6, "corporate", "Award Ceremony"),
        (7, "wedding", "Reception Entry"),
        (8, "other", "Baby Shower"),
        (9, "other", "Anniversary Dinner"),
    ]
    .into_iter()
    .map(|(id, category, title)| GalleryImage {
        id,
        category: category.into(),
        image_url: format!("https://picsum.photos/800/600?random={}", 9 + id),
        title: title.into(),
    })
    .collect()
}

/// Seeded reviews are pre-approved so the public page is never empty.
pub fn default_testimonials() -> Vec<Testimonial> {
    [
        (1, "Priya Sharma", "Bride", "Mumbai", 5, "M.K Event Management made my wedding absolutely fairylike! The decoration was exactly what I wanted. Highly recommended!"),
        (2, "Rahul Verma", "Corporate Client", "Delhi", 5, "Professional and on time. They managed our annual tech conference perfectly. The sound and stage setup was premium."),
        (3, "Anita Desai", "Mother", "Pune", 4, "Organized my son's 5th birthday. The jungle theme was a hit among kids! Great balloon work."),
    ]
    .into_iter()
    .map(|(id, name, role, location, rating, text)| Testimonial {
        id,
        name: name.into(),
        role: role.into(),
        location: location.into(),
        rating,
        text: text.into(),
        image: Some(format!("https://picsum.photos/100/100?random={}", id)),
        status: TestimonialStatus::Approved,
    })
    .collect()
}

pub fn default_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: 1,
            name: "Raj Malhotra".into(),
            role: "Founder & Lead Planner".into(),
            exp: "10 Years".into(),
            photo: "https://randomuser.me/api/portraits/men/1.jpg".into(),
        },
        TeamMember {
            id: 2,
            name: "Simran Kaur".into(),
            role: "Creative Director".into(),
            exp: "8 Years".into(),
            photo: "https://randomuser.me/api/portraits/women/2.jpg".into(),
        },
    ]
}

pub fn default_faqs() -> Vec<Faq> {
    vec![
        Faq {
            id: 1,
            q: "Do you travel outside the city?".into(),
            a: "Yes, we handle destination weddings...".into(),
            cat: "General".into(),
        },
        Faq {
            id: 2,
            q: "What is your booking policy?".into(),
            a: "We require a 30% advance payment...".into(),
            cat: "Booking".into(),
        },
    ]
}

pub fn default_settings() -> SiteSettings {
    SiteSettings {
        company_name: COMPANY_NAME.into(),
        phone: PHONE_NUMBER.into(),
        email: EMAIL_ADDRESS.into(),
        address: ADDRESS.into(),
        map_embed: TrustedHtml::operator_supplied(r#"<iframe src="..."></iframe>"#),
        meta_title: "M.K Event Management | Best Wedding Planner".into(),
        meta_desc: "Premier event planning services for weddings, corporate events, and parties.".into(),
        keywords: "wedding planner, event management, decoration, party planner".into(),
        hero_headline: COMPANY_NAME.into(),
        hero_sub_headline: "Making Your Moments Memorable".into(),
        hero_btn1: "Get Free Quote".into(),
        hero_btn2: "WhatsApp Now".into(),
    }
}

pub fn default_about() -> AboutData {
    AboutData {
        headline: format!("About {}", COMPANY_NAME),
        intro: "Founded with a passion for celebration and an eye for detail, M.K Event Management has grown to become one of the most trusted event management companies in the region.".into(),
        vision: "To be the leading event management company known for innovation...".into(),
        mission: "To create timeless memories for our clients by transforming ordinary spaces...".into(),
        years_exp: "5".into(),
        events_count: "200".into(),
        team_count: "15".into(),
        image_url: "https://picsum.photos/800/800?random=about".into(),
    }
}
