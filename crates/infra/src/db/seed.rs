//! One-shot baseline seeding for a fresh or partially-populated database.
//!
//! Operations run sequentially in declaration order. Each statement is its
//! own atomic unit; there is no wrapping transaction, so a failure aborts
//! the run and leaves earlier operations committed. Strategies differ per
//! entity set on purpose:
//!
//! - singletons and users: insert-or-ignore by fixed key / email
//! - menu items: insert only when no live (non-soft-deleted) slug exists
//! - sliders: destroy-and-rebuild when the count falls under the template size
//! - services/testimonials: unconditional append (one-time use only)
//! - partners: append guarded by a global count == 0 check
//! - categories and the sample article: upsert-by-slug, latest payload wins

use anyhow::{Context, Result};
use domain::content::{MenuLocation, Role, CONTACT_INFO_ID};
use domain::security::password::hash_password;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Sliders below this count trigger the destroy-and-rebuild path.
pub const SLIDER_MIN: i64 = 4;

const SITE_SETTINGS_ID: &str = "site-settings";
const HOME_ABOUT_ID: &str = "home-about";
const HOME_CTA_ID: &str = "home-cta";

#[tracing::instrument(skip_all)]
pub async fn run(pool: &SqlitePool) -> Result<()> {
    tracing::info!("starting seed");

    let super_admin_id = seed_users(pool).await.context("seed users")?;
    seed_site_settings(pool).await.context("seed site settings")?;
    seed_menu_items(pool).await.context("seed menu items")?;
    seed_sliders(pool).await.context("seed sliders")?;
    seed_home_about(pool).await.context("seed home about")?;
    seed_services(pool).await.context("seed services")?;
    seed_testimonials(pool).await.context("seed testimonials")?;
    seed_partners(pool).await.context("seed partners")?;
    seed_home_cta(pool).await.context("seed home cta")?;
    seed_categories(pool).await.context("seed categories")?;
    seed_sample_article(pool, &super_admin_id)
        .await
        .context("seed sample article")?;
    seed_contact_info(pool).await.context("seed contact info")?;

    tracing::info!("seed completed");
    Ok(())
}

fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "now".into())
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ==================== USERS ====================

/// Upsert-by-email with an empty update arm: existing accounts keep any
/// later edits. Returns the super-admin id for article authorship.
#[tracing::instrument(skip_all)]
async fn seed_users(pool: &SqlitePool) -> Result<String> {
    let users: [(&str, &str, &str, Role); 3] = [
        (
            "superadmin@aaea.com",
            "SuperAdmin123!",
            "Super Administrateur",
            Role::SuperAdmin,
        ),
        ("admin@aaea.com", "Admin123!", "Administrateur", Role::Admin),
        ("user@aaea.com", "User123!", "Utilisateur", Role::User),
    ];

    for (email, password, name, role) in users {
        let hash = hash_password(password)?;
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, name, role, active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(new_id())
        .bind(email)
        .bind(hash)
        .bind(name)
        .bind(role.as_str())
        .bind(now_rfc3339())
        .execute(pool)
        .await?;
    }

    let super_admin_id: String =
        sqlx::query_scalar("SELECT id FROM users WHERE email = 'superadmin@aaea.com'")
            .fetch_one(pool)
            .await?;
    Ok(super_admin_id)
}

// ==================== SITE SETTINGS ====================

#[tracing::instrument(skip_all)]
async fn seed_site_settings(pool: &SqlitePool) -> Result<()> {
    let social_links = serde_json::json!({
        "facebook": "https://facebook.com/aaea",
        "twitter": "https://twitter.com/aaea",
        "linkedin": "https://linkedin.com/company/aaea",
        "instagram": "https://instagram.com/aaea",
        "youtube": "https://youtube.com/aaea",
    })
    .to_string();

    sqlx::query(
        r#"
        INSERT OR IGNORE INTO site_settings (
          id, logo_url, logo_alt_fr, logo_alt_en,
          color1, color2, color3, color4,
          site_name_fr, site_name_en, site_description_fr, site_description_en,
          address, email, phone, phone2,
          working_hours_fr, working_hours_en,
          social_links, map_latitude, map_longitude, map_zoom
        ) VALUES (
          ?1, '/logo_aaea.jpg', 'AAEA - Logo', 'AAEA - Logo',
          '#362981', '#009446', '#029CB1', '#9AD2E2',
          'AAEA', 'AAEA',
          'Association pour l''Avancement de l''Environnement et de l''Agriculture',
          'Association for the Advancement of Environment and Agriculture',
          '123 Rue Example, Paris 75001, France', 'contact@aaea.org',
          '+33 1 23 45 67 89', '+33 1 23 45 67 90',
          'Lundi - Vendredi: 9h00 - 18h00', 'Monday - Friday: 9:00 AM - 6:00 PM',
          ?2, 48.8566, 2.3522, 15
        )
        "#,
    )
    .bind(SITE_SETTINGS_ID)
    .bind(social_links)
    .execute(pool)
    .await?;
    Ok(())
}

// ==================== MENU ITEMS ====================

struct MenuSeed {
    slug: &'static str,
    route: &'static str,
    label_fr: &'static str,
    label_en: &'static str,
    location: MenuLocation,
    ordinal: i64,
}

const MENU_TEMPLATE: &[MenuSeed] = &[
    // Header menu
    MenuSeed { slug: "accueil", route: "/", label_fr: "Accueil", label_en: "Home", location: MenuLocation::Header, ordinal: 0 },
    MenuSeed { slug: "a-propos", route: "/a-propos", label_fr: "À propos", label_en: "About", location: MenuLocation::Header, ordinal: 1 },
    MenuSeed { slug: "solutions", route: "/solutions", label_fr: "Solutions", label_en: "Solutions", location: MenuLocation::Header, ordinal: 2 },
    MenuSeed { slug: "realisations", route: "/realisations", label_fr: "Réalisations", label_en: "Projects", location: MenuLocation::Header, ordinal: 3 },
    MenuSeed { slug: "ressources", route: "/ressources", label_fr: "Ressources", label_en: "Resources", location: MenuLocation::Header, ordinal: 4 },
    MenuSeed { slug: "evenements", route: "/evenements", label_fr: "Événements", label_en: "Events", location: MenuLocation::Header, ordinal: 5 },
    MenuSeed { slug: "contact", route: "/contact", label_fr: "Contact", label_en: "Contact", location: MenuLocation::Header, ordinal: 6 },
    // Footer menu
    MenuSeed { slug: "mentions-legales", route: "/mentions-legales", label_fr: "Mentions légales", label_en: "Legal notice", location: MenuLocation::Footer, ordinal: 0 },
    MenuSeed { slug: "politique-confidentialite", route: "/politique-confidentialite", label_fr: "Politique de confidentialité", label_en: "Privacy policy", location: MenuLocation::Footer, ordinal: 1 },
    MenuSeed { slug: "conditions-utilisation", route: "/conditions-utilisation", label_fr: "Conditions d'utilisation", label_en: "Terms of use", location: MenuLocation::Footer, ordinal: 2 },
];

/// Create-if-absent keyed on (slug, live). A live row with the same slug is
/// left untouched so admin edits survive re-seeding; a soft-deleted row is
/// excluded from the check and does not block recreation.
#[tracing::instrument(skip_all)]
async fn seed_menu_items(pool: &SqlitePool) -> Result<()> {
    for item in MENU_TEMPLATE {
        let existing: Option<i64> = sqlx::query_scalar(
            "SELECT 1 FROM menu_items WHERE slug = ?1 AND deleted_at IS NULL LIMIT 1",
        )
        .bind(item.slug)
        .fetch_optional(pool)
        .await?;
        if existing.is_some() {
            continue;
        }

        sqlx::query(
            r#"
            INSERT INTO menu_items (id, slug, route, label_fr, label_en, location, ordinal)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(new_id())
        .bind(item.slug)
        .bind(item.route)
        .bind(item.label_fr)
        .bind(item.label_en)
        .bind(item.location.as_str())
        .bind(item.ordinal)
        .execute(pool)
        .await?;
    }
    Ok(())
}

// ==================== SLIDERS ====================

struct SliderSeed {
    title_fr: &'static str,
    title_en: &'static str,
    subtitle_fr: &'static str,
    subtitle_en: &'static str,
    button_text_fr: &'static str,
    button_text_en: &'static str,
    button_url: &'static str,
    image_url: &'static str,
    image_alt_fr: &'static str,
    image_alt_en: &'static str,
}

const SLIDER_TEMPLATE: &[SliderSeed] = &[
    SliderSeed {
        title_fr: "Bienvenue à l'AAEA",
        title_en: "Welcome to AAEA",
        subtitle_fr: "Ensemble pour un avenir durable et une agriculture responsable",
        subtitle_en: "Together for a sustainable future and responsible agriculture",
        button_text_fr: "Découvrir",
        button_text_en: "Discover",
        button_url: "/a-propos",
        image_url: "/images/slider-1.jpg",
        image_alt_fr: "Paysage naturel et agriculture",
        image_alt_en: "Natural landscape and agriculture",
    },
    SliderSeed {
        title_fr: "Nos Solutions Innovantes",
        title_en: "Our Innovative Solutions",
        subtitle_fr: "Technologies durables pour l'agriculture de demain",
        subtitle_en: "Sustainable technologies for tomorrow's agriculture",
        button_text_fr: "En savoir plus",
        button_text_en: "Learn more",
        button_url: "/solutions",
        image_url: "/images/slider-2.jpg",
        image_alt_fr: "Agriculture moderne et technologie",
        image_alt_en: "Modern agriculture and technology",
    },
    SliderSeed {
        title_fr: "Formez-vous avec nous",
        title_en: "Train with us",
        subtitle_fr: "Programmes de formation pour les agriculteurs et les communautés rurales",
        subtitle_en: "Training programs for farmers and rural communities",
        button_text_fr: "Nos formations",
        button_text_en: "Our training",
        button_url: "/solutions",
        image_url: "/images/slider-3.jpg",
        image_alt_fr: "Formation agricole",
        image_alt_en: "Agricultural training",
    },
    SliderSeed {
        title_fr: "Engagez-vous pour l'environnement",
        title_en: "Commit to the environment",
        subtitle_fr: "Rejoignez notre mission pour protéger la biodiversité et les ressources naturelles",
        subtitle_en: "Join our mission to protect biodiversity and natural resources",
        button_text_fr: "Nous rejoindre",
        button_text_en: "Join us",
        button_url: "/contact",
        image_url: "/images/slider-4.jpg",
        image_alt_fr: "Protection de l'environnement",
        image_alt_en: "Environmental protection",
    },
];

/// Threshold-triggered full replace. Any undercount wipes manual edits; a
/// count at or above the template size leaves existing rows alone. This is
/// a blunt resync meant for initial population (see also [`reset_sliders`]
/// for the explicit, deliberate variant).
#[tracing::instrument(skip_all)]
async fn seed_sliders(pool: &SqlitePool) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sliders")
        .fetch_one(pool)
        .await?;
    if existing < SLIDER_MIN {
        reset_sliders(pool).await?;
    }
    Ok(())
}

/// Destroy all sliders and rebuild the fixed ordered template. Explicitly
/// invokable so a re-sync is an operator decision, not a count heuristic.
#[tracing::instrument(skip_all)]
pub async fn reset_sliders(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM sliders").execute(pool).await?;

    for (ordinal, s) in SLIDER_TEMPLATE.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO sliders (
              id, title_fr, title_en, subtitle_fr, subtitle_en,
              button_text_fr, button_text_en, button_url,
              image_url, image_alt_fr, image_alt_en, ordinal, visible
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, 1)
            "#,
        )
        .bind(new_id())
        .bind(s.title_fr)
        .bind(s.title_en)
        .bind(s.subtitle_fr)
        .bind(s.subtitle_en)
        .bind(s.button_text_fr)
        .bind(s.button_text_en)
        .bind(s.button_url)
        .bind(s.image_url)
        .bind(s.image_alt_fr)
        .bind(s.image_alt_en)
        .bind(ordinal as i64)
        .execute(pool)
        .await?;
    }
    Ok(())
}

// ==================== HOME SECTIONS ====================

#[tracing::instrument(skip_all)]
async fn seed_home_about(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        INSERT OR IGNORE INTO home_about (
          id, title_fr, title_en, content_fr, content_en,
          image_url, image_alt_fr, image_alt_en,
          button_text_fr, button_text_en, button_url
        ) VALUES (
          ?1, 'Qui sommes-nous', 'Who we are',
          'L''AAEA est une organisation dédiée à la promotion de pratiques agricoles durables et à la protection de l''environnement. Nous travaillons avec les communautés locales, les agriculteurs et les décideurs pour créer un avenir plus vert.',
          'AAEA is an organization dedicated to promoting sustainable agricultural practices and protecting the environment. We work with local communities, farmers, and policymakers to create a greener future.',
          '/images/about.jpg', 'Notre équipe en action', 'Our team in action',
          'En savoir plus', 'Learn more', '/a-propos'
        )
        "#,
    )
    .bind(HOME_ABOUT_ID)
    .execute(pool)
    .await?;
    Ok(())
}

#[tracing::instrument(skip_all)]
async fn seed_home_cta(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        INSERT OR IGNORE INTO home_cta (
          id, title_fr, title_en, subtitle_fr, subtitle_en,
          button_text_fr, button_text_en, button_url
        ) VALUES (
          ?1, 'Prêt à faire la différence ?', 'Ready to make a difference?',
          'Rejoignez-nous dans notre mission pour un avenir durable.',
          'Join us in our mission for a sustainable future.',
          'Contactez-nous', 'Contact us', '/contact'
        )
        "#,
    )
    .bind(HOME_CTA_ID)
    .execute(pool)
    .await?;
    Ok(())
}

// ==================== SERVICES / TESTIMONIALS / PARTNERS ====================

/// Unconditional append. Re-running duplicates rows; only safe as a true
/// one-time script.
#[tracing::instrument(skip_all)]
async fn seed_services(pool: &SqlitePool) -> Result<()> {
    let services: [(&str, &str, &str, &str, &str); 4] = [
        (
            "Formation Agricole",
            "Agricultural Training",
            "Programmes de formation pour les agriculteurs sur les pratiques durables.",
            "Training programs for farmers on sustainable practices.",
            "GraduationCap",
        ),
        (
            "Consultation Environnementale",
            "Environmental Consulting",
            "Conseils experts pour les projets de développement durable.",
            "Expert advice for sustainable development projects.",
            "Leaf",
        ),
        (
            "Recherche & Innovation",
            "Research & Innovation",
            "Recherche sur les technologies agricoles innovantes.",
            "Research on innovative agricultural technologies.",
            "Lightbulb",
        ),
        (
            "Développement Communautaire",
            "Community Development",
            "Programmes de développement pour les communautés rurales.",
            "Development programs for rural communities.",
            "Users",
        ),
    ];

    for (ordinal, (title_fr, title_en, desc_fr, desc_en, icon)) in services.into_iter().enumerate()
    {
        sqlx::query(
            r#"
            INSERT INTO services (id, title_fr, title_en, description_fr, description_en, icon, ordinal)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(new_id())
        .bind(title_fr)
        .bind(title_en)
        .bind(desc_fr)
        .bind(desc_en)
        .bind(icon)
        .bind(ordinal as i64)
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// Unconditional append, same caveat as services.
#[tracing::instrument(skip_all)]
async fn seed_testimonials(pool: &SqlitePool) -> Result<()> {
    let testimonials: [(&str, &str, &str, &str); 3] = [
        (
            "Marie Dupont",
            "AgriTech Solutions",
            "L'AAEA nous a aidés à transformer nos pratiques agricoles. Les résultats sont remarquables.",
            "AAEA helped us transform our agricultural practices. The results are remarkable.",
        ),
        (
            "Jean Martin",
            "Coopérative Agricole du Sud",
            "Une équipe professionnelle et passionnée. Nos agriculteurs ont beaucoup appris.",
            "A professional and passionate team. Our farmers have learned a lot.",
        ),
        (
            "Sophie Bernard",
            "Green Future Foundation",
            "Un partenaire incontournable pour tout projet de développement durable.",
            "An essential partner for any sustainable development project.",
        ),
    ];

    for (ordinal, (name, company, text_fr, text_en)) in testimonials.into_iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO testimonials (id, name, company, text_fr, text_en, rating, ordinal)
            VALUES (?1, ?2, ?3, ?4, ?5, 5, ?6)
            "#,
        )
        .bind(new_id())
        .bind(name)
        .bind(company)
        .bind(text_fr)
        .bind(text_en)
        .bind(ordinal as i64)
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// Append guarded by a global count check: a second run finds a non-zero
/// count and inserts nothing.
#[tracing::instrument(skip_all)]
async fn seed_partners(pool: &SqlitePool) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM partners")
        .fetch_one(pool)
        .await?;
    if existing != 0 {
        return Ok(());
    }

    let partners: [(&str, &str, &str); 12] = [
        ("Ministère de l'Agriculture", "/images/partners/ministere.png", "https://agriculture.gouv.fr"),
        ("FAO", "/images/partners/fao.png", "https://fao.org"),
        ("Banque Mondiale", "/images/partners/worldbank.png", "https://worldbank.org"),
        ("Union Européenne", "/images/partners/eu.png", "https://europa.eu"),
        ("USAID", "/images/partners/usaid.png", "https://usaid.gov"),
        ("GIZ", "/images/partners/giz.png", "https://giz.de"),
        ("AFD", "/images/partners/afd.png", "https://afd.fr"),
        ("CIRAD", "/images/partners/cirad.png", "https://cirad.fr"),
        ("IRD", "/images/partners/ird.png", "https://ird.fr"),
        ("CGIAR", "/images/partners/cgiar.png", "https://cgiar.org"),
        ("Bill & Melinda Gates Foundation", "/images/partners/gates.png", "https://gatesfoundation.org"),
        ("WWF", "/images/partners/wwf.png", "https://wwf.org"),
    ];

    for (ordinal, (name, logo_url, website)) in partners.into_iter().enumerate() {
        sqlx::query(
            "INSERT INTO partners (id, name, logo_url, website, ordinal) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(new_id())
        .bind(name)
        .bind(logo_url)
        .bind(website)
        .bind(ordinal as i64)
        .execute(pool)
        .await?;
    }
    Ok(())
}

// ==================== CATEGORIES ====================

struct CategorySeed {
    name_fr: &'static str,
    name_en: &'static str,
    slug: &'static str,
    ordinal: i64,
}

const REALISATION_CATEGORIES: &[CategorySeed] = &[
    CategorySeed { name_fr: "Agriculture Durable", name_en: "Sustainable Agriculture", slug: "agriculture-durable", ordinal: 0 },
    CategorySeed { name_fr: "Énergies Renouvelables", name_en: "Renewable Energies", slug: "energies-renouvelables", ordinal: 1 },
    CategorySeed { name_fr: "Gestion de l'Eau", name_en: "Water Management", slug: "gestion-eau", ordinal: 2 },
    CategorySeed { name_fr: "Biodiversité", name_en: "Biodiversity", slug: "biodiversite", ordinal: 3 },
];

const RESOURCE_CATEGORIES: &[CategorySeed] = &[
    CategorySeed { name_fr: "Guides & Manuels", name_en: "Guides & Manuals", slug: "guides-manuels", ordinal: 0 },
    CategorySeed { name_fr: "Rapports", name_en: "Reports", slug: "rapports", ordinal: 1 },
    CategorySeed { name_fr: "Présentations", name_en: "Presentations", slug: "presentations", ordinal: 2 },
    CategorySeed { name_fr: "Documents Techniques", name_en: "Technical Documents", slug: "documents-techniques", ordinal: 3 },
];

const ARTICLE_CATEGORIES: &[CategorySeed] = &[
    CategorySeed { name_fr: "Actualités", name_en: "News", slug: "actualites", ordinal: 0 },
    CategorySeed { name_fr: "Conseils", name_en: "Tips", slug: "conseils", ordinal: 1 },
    CategorySeed { name_fr: "Études", name_en: "Studies", slug: "etudes", ordinal: 2 },
];

/// Upsert-by-slug for all three category tables: re-running with the same
/// input converges on one row per slug carrying the latest payload.
#[tracing::instrument(skip_all)]
async fn seed_categories(pool: &SqlitePool) -> Result<()> {
    for (table, cats) in [
        ("realisation_categories", REALISATION_CATEGORIES),
        ("resource_categories", RESOURCE_CATEGORIES),
        ("article_categories", ARTICLE_CATEGORIES),
    ] {
        for cat in cats {
            let sql = format!(
                r#"
                INSERT INTO {table} (id, name_fr, name_en, slug, ordinal)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT (slug) DO UPDATE SET
                  name_fr = excluded.name_fr,
                  name_en = excluded.name_en,
                  ordinal = excluded.ordinal
                "#
            );
            sqlx::query(&sql)
                .bind(new_id())
                .bind(cat.name_fr)
                .bind(cat.name_en)
                .bind(cat.slug)
                .bind(cat.ordinal)
                .execute(pool)
                .await?;
        }
    }
    Ok(())
}

// ==================== SAMPLE CONTENT ====================

#[tracing::instrument(skip_all)]
async fn seed_sample_article(pool: &SqlitePool, author_id: &str) -> Result<()> {
    let category_id: Option<String> =
        sqlx::query_scalar("SELECT id FROM article_categories WHERE slug = 'actualites' LIMIT 1")
            .fetch_optional(pool)
            .await?;
    let Some(category_id) = category_id else {
        return Ok(());
    };

    sqlx::query(
        r#"
        INSERT INTO articles (
          id, slug, title_fr, title_en, content_fr, content_en,
          excerpt_fr, excerpt_en, published, featured, published_at,
          author_id, category_id, created_at
        ) VALUES (
          ?1, 'lancement-programme-formation',
          'Lancement de notre nouveau programme de formation',
          'Launch of our new training program',
          '<p>Nous sommes ravis d''annoncer le lancement de notre nouveau programme de formation agricole. Ce programme vise à former 1000 agriculteurs d''ici 2025.</p>',
          '<p>We are excited to announce the launch of our new agricultural training program. This program aims to train 1000 farmers by 2025.</p>',
          'Découvrez notre nouveau programme de formation agricole.',
          'Discover our new agricultural training program.',
          1, 1, ?2, ?3, ?4, ?2
        )
        ON CONFLICT (slug) DO UPDATE SET
          title_fr    = excluded.title_fr,
          title_en    = excluded.title_en,
          content_fr  = excluded.content_fr,
          content_en  = excluded.content_en,
          excerpt_fr  = excluded.excerpt_fr,
          excerpt_en  = excluded.excerpt_en,
          published   = excluded.published,
          featured    = excluded.featured,
          author_id   = excluded.author_id,
          category_id = excluded.category_id
        "#,
    )
    .bind(new_id())
    .bind(now_rfc3339())
    .bind(author_id)
    .bind(category_id)
    .execute(pool)
    .await?;
    Ok(())
}

// ==================== CONTACT INFO ====================

#[tracing::instrument(skip_all)]
async fn seed_contact_info(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        INSERT OR IGNORE INTO contact_info (
          id, title_fr, title_en, description_fr, description_en,
          address, email, phone, phone2, working_hours_fr, working_hours_en
        ) VALUES (
          ?1, 'Contactez-nous', 'Contact us',
          'Nous sommes à votre disposition pour répondre à toutes vos questions.',
          'We are at your disposal to answer all your questions.',
          '123 Rue Example, Paris 75001, France', 'contact@aaea.org',
          '+33 1 23 45 67 89', '+33 1 23 45 67 90',
          'Lundi - Vendredi: 9h00 - 18h00', 'Monday - Friday: 9:00 AM - 6:00 PM'
        )
        "#,
    )
    .bind(CONTACT_INFO_ID)
    .execute(pool)
    .await?;
    Ok(())
}
