//! Seed the catalog with demo data.
//!
//! Inserts the six vertical tiles, a handful of restaurants with menus,
//! promos, doctors, and craftsmen - enough to click through every storefront
//! screen. Refuses to run against a catalog that already has restaurants.

use rust_decimal::Decimal;
use secrecy::SecretString;
use sqlx::PgPool;

use souk_admin::db;
use souk_admin::db::catalog::{CategoryInput, PromoInput};
use souk_admin::db::directory::{CraftsmanInput, DoctorInput};
use souk_admin::db::stores::{ProductInput, RestaurantInput};
use souk_admin::db::{
    CatalogAdminRepository, DirectoryAdminRepository, StoreAdminRepository,
};

/// Seed demo catalog data.
///
/// # Errors
///
/// Returns an error if the database is unreachable or any insert fails.
pub async fn catalog() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "ADMIN_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;

    if already_seeded(&pool).await? {
        tracing::info!("Catalog already has restaurants; skipping seed");
        return Ok(());
    }

    seed_categories(&pool).await?;
    seed_restaurants(&pool).await?;
    seed_directory(&pool).await?;
    seed_promos(&pool).await?;

    tracing::info!("Catalog seeded");
    Ok(())
}

async fn already_seeded(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT count(*) FROM catalog.restaurant")
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

async fn seed_categories(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = CatalogAdminRepository::new(pool);

    let tiles = [
        ("مطاعم", "/restaurants", "orange"),
        ("صيدليات", "/pharmacies", "green"),
        ("سوبر ماركت", "/supermarkets", "blue"),
        ("توظيف", "/jobs", "purple"),
        ("دكتور", "/doctors", "red"),
        ("صنيعية", "/handymen", "gray"),
    ];

    for (name, link, color) in tiles {
        repo.create_category(&CategoryInput {
            name: name.to_owned(),
            icon: format!("/uploads/icons{link}.png"),
            link: link.to_owned(),
            color: color.to_owned(),
        })
        .await?;
    }

    tracing::info!(count = tiles.len(), "Seeded categories");
    Ok(())
}

async fn seed_restaurants(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = StoreAdminRepository::new(pool);

    let burger_palace = repo
        .create_restaurant(&RestaurantInput {
            name: "برجر كينج".to_owned(),
            image: "/uploads/restaurants/burger-king.jpg".to_owned(),
            description: Some(
                "استمتع بأشهى برجر في المدينة مع خدمة توصيل سريعة وأطعمة طازجة".to_owned(),
            ),
            rating: Some(Decimal::new(45, 1)),
            reviews: Some(230),
            delivery_time: Some("30-45 دقيقة".to_owned()),
            min_order: Some(Decimal::from(50)),
            categories: vec!["برجر".to_owned(), "وجبات سريعة".to_owned()],
        })
        .await?;

    let menu = [
        ("بيج كينج", "برجر دبل لحم مع جبنة وصوص خاص", 90, "برجر"),
        ("تشيز برجر", "برجر لحم مع طبقة مضاعفة من الجبن الذائب", 75, "برجر"),
        ("بطاطس كبير", "بطاطس مقرمشة مقلية", 35, "جانبية"),
        ("حلقات البصل", "حلقات بصل مقرمشة", 30, "جانبية"),
        ("كوكاكولا", "كوكاكولا باردة", 15, "مشروبات"),
        ("عصير برتقال", "عصير برتقال طازج", 20, "مشروبات"),
    ];

    for (name, description, price, category) in menu {
        repo.create_product(&ProductInput {
            restaurant_id: burger_palace.id,
            name: name.to_owned(),
            description: Some(description.to_owned()),
            price: Decimal::from(price),
            image: "/uploads/products/placeholder.jpg".to_owned(),
            category: Some(category.to_owned()),
        })
        .await?;
    }

    repo.create_restaurant(&RestaurantInput {
        name: "بيتزا هت".to_owned(),
        image: "/uploads/restaurants/pizza-hut.jpg".to_owned(),
        description: None,
        rating: Some(Decimal::new(42, 1)),
        reviews: Some(180),
        delivery_time: Some("40-55 دقيقة".to_owned()),
        min_order: Some(Decimal::from(75)),
        categories: vec!["بيتزا".to_owned(), "إيطالي".to_owned()],
    })
    .await?;

    repo.create_restaurant(&RestaurantInput {
        name: "المطعم الشرقي".to_owned(),
        image: "/uploads/restaurants/oriental.jpg".to_owned(),
        description: None,
        rating: Some(Decimal::new(47, 1)),
        reviews: Some(150),
        delivery_time: Some("45-60 دقيقة".to_owned()),
        min_order: Some(Decimal::from(100)),
        categories: vec!["شرقي".to_owned(), "مشويات".to_owned()],
    })
    .await?;

    tracing::info!("Seeded restaurants and menu");
    Ok(())
}

async fn seed_directory(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = DirectoryAdminRepository::new(pool);

    let doctors = [
        ("د. أحمد محمد", "باطنة", "أستاذ بكلية الطب جامعة القاهرة", 300),
        ("د. سارة خالد", "أطفال", "استشاري طب الأطفال", 250),
        ("د. محمد علي", "عظام", "دكتوراه في جراحة العظام", 350),
        ("د. نورا حسن", "نساء وتوليد", "أستاذ بكلية الطب جامعة عين شمس", 400),
    ];

    for (name, specialty, education, price) in doctors {
        repo.create_doctor(&DoctorInput {
            name: name.to_owned(),
            specialty: specialty.to_owned(),
            education: Some(education.to_owned()),
            image: "/uploads/doctors/placeholder.jpg".to_owned(),
            price: Decimal::from(price),
            rating: Some(Decimal::new(48, 1)),
            reviews: Some(100),
        })
        .await?;
    }

    let craftsmen = [
        ("محمد صلاح", "كهرباء", 100),
        ("أحمد حسن", "سباكة", 90),
        ("علي محمود", "نجارة", 120),
        ("محمود أحمد", "دهان", 85),
    ];

    for (name, profession, rate) in craftsmen {
        repo.create_craftsman(&CraftsmanInput {
            name: name.to_owned(),
            profession: profession.to_owned(),
            description: None,
            area: None,
            phone: None,
            image: "/uploads/craftsmen/placeholder.jpg".to_owned(),
            hourly_rate: Decimal::from(rate),
            rating: Some(Decimal::new(46, 1)),
            reviews: Some(80),
        })
        .await?;
    }

    tracing::info!("Seeded doctors and craftsmen");
    Ok(())
}

async fn seed_promos(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = CatalogAdminRepository::new(pool);

    let promos = [
        (
            "خصم 30% على جميع الوجبات",
            "استمتع بخصم 30% على جميع وجبات المطاعم لفترة محدودة",
        ),
        (
            "توصيل مجاني",
            "استمتع بتوصيل مجاني على جميع الطلبات فوق 100 جنيه",
        ),
        ("عروض الصيدلية", "خصومات تصل إلى 25% على المنتجات الصحية"),
    ];

    for (title, description) in promos {
        repo.create_promo(&PromoInput {
            title: title.to_owned(),
            description: Some(description.to_owned()),
            image: "/uploads/promos/placeholder.jpg".to_owned(),
            active: true,
        })
        .await?;
    }

    tracing::info!(count = promos.len(), "Seeded promos");
    Ok(())
}
