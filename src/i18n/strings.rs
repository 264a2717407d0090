use serde::Serialize;

/// Complete UI copy for one locale.
///
/// Serialized keys are camelCase to match the storefront templates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub features: FeatureStrings,
    pub testimonials: TestimonialStrings,
    pub order: OrderFormStrings,
    pub products: ProductStrings,
    pub common: CommonStrings,
}

// ==================== Navigation ====================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavStrings {
    pub home: &'static str,
    pub blog: &'static str,
    pub language: &'static str,
}

// ==================== Home Page ====================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutStrings {
    pub title: &'static str,
    pub text1: &'static str,
    pub text2: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCard {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStrings {
    pub title: &'static str,
    pub premium: FeatureCard,
    pub custom: FeatureCard,
    pub fast: FeatureCard,
    pub gifts: FeatureCard,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialStrings {
    pub title: &'static str,
}

// ==================== Order Form ====================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormStrings {
    pub title: &'static str,
    pub pricing: &'static str,
    pub note: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub clothing_type: &'static str,
    pub custom_text: &'static str,
    /// Upload label, mentions the 5MB limit
    pub image: &'static str,
    pub submit: &'static str,
    pub select_type: &'static str,
    pub text_placeholder: &'static str,
    pub choose_file: &'static str,
    pub select_price: &'static str,
    pub selected: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStrings {
    pub tshirt: &'static str,
    pub hoodie: &'static str,
    pub shirt: &'static str,
    pub mug: &'static str,
    pub cap: &'static str,
    pub other: &'static str,
}

// ==================== Shared ====================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonStrings {
    pub selected: &'static str,
    pub file_too_large: &'static str,
    pub file_size: &'static str,
}

// ==================== English Strings ====================

/// English UI copy (canonical)
pub const ENGLISH_STRINGS: Translations = Translations {
    nav: NavStrings {
        home: "Home",
        blog: "Blog",
        language: "Language",
    },
    hero: HeroStrings {
        title: "Custom Clothing. Your Style.",
        subtitle: "Order your personalized T-shirts, hoodies, and more today!",
    },
    about: AboutStrings {
        title: "About Snaphalagulus",
        text1: "We're passionate about creating custom clothing that reflects your unique style. \
Whether it's a personalized T-shirt, cozy hoodie, or a special gift, we bring your designs to life \
with premium quality materials and printing.",
        text2: "Every order is handcrafted with care, ensuring that your custom text and images are \
printed with precision and durability. We believe that clothing should be an expression of who you are.",
    },
    features: FeatureStrings {
        title: "Why Choose Us?",
        premium: FeatureCard {
            title: "Premium Quality",
            desc: "High-grade fabrics and professional printing techniques for lasting results.",
        },
        custom: FeatureCard {
            title: "Custom Designs",
            desc: "Add your own text, logos, or images to create truly unique clothing.",
        },
        fast: FeatureCard {
            title: "Fast Service",
            desc: "Quick turnaround times without compromising on quality.",
        },
        gifts: FeatureCard {
            title: "Great Gifts",
            desc: "Perfect personalized presents for birthdays, holidays, or special occasions.",
        },
    },
    testimonials: TestimonialStrings {
        title: "What Our Customers Say",
    },
    order: OrderFormStrings {
        title: "Place Your Order",
        pricing: "Pricing & Payment",
        note: "You will receive payment instructions via email after submitting your order. \
We'll notify you at the email address you provide below.",
        name: "Name",
        email: "Email",
        clothing_type: "Clothing Type",
        custom_text: "Custom Text",
        image: "Upload Image (Max 5MB)",
        submit: "Submit Order",
        select_type: "Select...",
        text_placeholder: "What text would you like printed?",
        choose_file: "Choose File",
        select_price: "Select a clothing type to see price",
        selected: "Selected",
        success: "Order submitted successfully! We'll be in touch soon.",
        error: "Something went wrong. Please try again.",
    },
    products: ProductStrings {
        tshirt: "T-Shirt",
        hoodie: "Hoodie",
        shirt: "Shirt",
        mug: "Mug",
        cap: "Cap",
        other: "Other",
    },
    common: CommonStrings {
        selected: "Selected",
        file_too_large: "File too large! Maximum size is 5MB.",
        file_size: "MB",
    },
};

// ==================== Italian Strings ====================

/// Italian UI copy
pub const ITALIAN_STRINGS: Translations = Translations {
    nav: NavStrings {
        home: "Home",
        blog: "Blog",
        language: "Lingua",
    },
    hero: HeroStrings {
        title: "Abbigliamento Personalizzato. Il Tuo Stile.",
        subtitle: "Ordina le tue T-shirt personalizzate, felpe e altro ancora oggi!",
    },
    about: AboutStrings {
        title: "Chi Siamo - Snaphalagulus",
        text1: "Siamo appassionati nella creazione di abbigliamento personalizzato che riflette il \
tuo stile unico. Che si tratti di una T-shirt personalizzata, una felpa comoda o un regalo speciale, \
diamo vita ai tuoi design con materiali e stampe di qualità premium.",
        text2: "Ogni ordine è realizzato a mano con cura, garantendo che i tuoi testi e immagini \
personalizzati siano stampati con precisione e durata. Crediamo che l'abbigliamento dovrebbe essere \
un'espressione di chi sei.",
    },
    features: FeatureStrings {
        title: "Perché Sceglierci?",
        premium: FeatureCard {
            title: "Qualità Premium",
            desc: "Tessuti di alta qualità e tecniche di stampa professionali per risultati duraturi.",
        },
        custom: FeatureCard {
            title: "Design Personalizzati",
            desc: "Aggiungi i tuoi testi, loghi o immagini per creare abbigliamento davvero unico.",
        },
        fast: FeatureCard {
            title: "Servizio Veloce",
            desc: "Tempi di consegna rapidi senza compromettere la qualità.",
        },
        gifts: FeatureCard {
            title: "Regali Perfetti",
            desc: "Regali personalizzati perfetti per compleanni, feste o occasioni speciali.",
        },
    },
    testimonials: TestimonialStrings {
        title: "Cosa Dicono i Nostri Clienti",
    },
    order: OrderFormStrings {
        title: "Effettua il Tuo Ordine",
        pricing: "Prezzi e Pagamento",
        note: "Riceverai le istruzioni di pagamento via email dopo aver inviato il tuo ordine. \
Ti notificheremo all'indirizzo email che fornisci di seguito.",
        name: "Nome",
        email: "Email",
        clothing_type: "Tipo di Abbigliamento",
        custom_text: "Testo Personalizzato",
        image: "Carica Immagine (Max 5MB)",
        submit: "Invia Ordine",
        select_type: "Seleziona...",
        text_placeholder: "Quale testo vorresti stampare?",
        choose_file: "Scegli File",
        select_price: "Seleziona un tipo di abbigliamento per vedere il prezzo",
        selected: "Selezionato",
        success: "Ordine inviato con successo! Ti contatteremo presto.",
        error: "Qualcosa è andato storto. Riprova.",
    },
    products: ProductStrings {
        tshirt: "T-Shirt",
        hoodie: "Felpa",
        shirt: "Camicia",
        mug: "Tazza",
        cap: "Cappello",
        other: "Altro",
    },
    common: CommonStrings {
        selected: "Selezionato",
        file_too_large: "File troppo grande! La dimensione massima è 5MB.",
        file_size: "MB",
    },
};
