//! Static Page Content
//!
//! Catalog and copy tables rendered by the page sections.

use crate::models::{ComparisonRow, FaqEntry, Metamorphosis, Package, Product, Review, Stat, Step};

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        title: "7 mitów o hipertrofii mięśniowej, które blokują Twój progres",
        description: "Rozprawiam się z najczęstszymi przekonaniami z siłowni i pokazuję, co naprawdę buduje mięśnie.",
        price_cents: 8900,
        image: "/assets/ebook1.png",
    },
    Product {
        id: 2,
        title: "Jak jeść smacznie, zdrowo i skutecznie – bez restrykcyjnych diet",
        description: "Praktyczny przewodnik po żywieniu, które da się utrzymać na lata, z przykładowymi jadłospisami.",
        price_cents: 8900,
        image: "/assets/ebook2.png",
    },
];

/// Shared bullet list printed under every e-book
pub const EBOOK_PERKS: &[&str] = &[
    "Szybsze efekty",
    "Proste i praktyczne wskazówki",
    "Bez zbędnych restrykcji",
];

pub const PACKAGES: [Package; 3] = [
    Package {
        title: "Pakiet Essential",
        features: &["Raporty co 4 tygodnie", "Pełne prowadzenie treningowe", "Monitorowanie diety"],
    },
    Package {
        title: "Pakiet Essential Plus",
        features: &[
            "Raporty co 2 tygodnie",
            "Pełne prowadzenie treningowe",
            "Monitorowanie diety",
            "20% zniżki na e-booki",
            "Analiza psychologiczna stylu motywacji",
            "Kontakt w razie pytań",
        ],
    },
    Package {
        title: "Pakiet PRO",
        features: &[
            "Raporty co tydzień",
            "Pełne prowadzenie treningowe",
            "Monitorowanie diety",
            "E-book gratis",
            "Analiza psychologiczna stylu motywacji",
            "Priorytetowy kontakt",
        ],
    },
];

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow { feature: "Raporty", values: ["co 4 tyg.", "co 2 tyg.", "co tydzień"] },
    ComparisonRow { feature: "Prowadzenie treningowe", values: ["✓", "✓", "✓"] },
    ComparisonRow { feature: "Monitorowanie diety", values: ["✓", "✓", "✓"] },
    ComparisonRow { feature: "Zniżka na e-booki / e-book", values: ["—", "20%", "E-book gratis"] },
    ComparisonRow { feature: "Analiza stylu motywacji", values: ["—", "✓", "✓"] },
    ComparisonRow { feature: "Kontakt priorytetowy", values: ["—", "—", "✓"] },
];

pub const STATS: &[Stat] = &[
    Stat {
        end: 6,
        suffix: "+",
        label: "lat doświadczenia",
        detail: "Setki godzin na sali i w prowadzeniu online.",
    },
    Stat {
        end: 43,
        suffix: "+",
        label: "zadowolonych klientów",
        detail: "Realne metamorfozy i utrzymane efekty.",
    },
];

pub const STEPS: &[Step] = &[
    Step { title: "Konsultacja wstępna", detail: "Poznajemy Twoje cele i możliwości." },
    Step { title: "Audyt i plan", detail: "Analiza nawyków, dobór ćwiczeń i strategii." },
    Step { title: "Realizacja", detail: "Wdrażasz plan, uczysz się techniki i nawyków." },
    Step { title: "Monitoring", detail: "Raporty wg pakietu i korekty planu." },
];

pub const REVIEWS: &[Review] = &[
    Review { author: "Piotr", text: "Sympatyczny chłopak, któremu przede wszystkim się chce trenować ludzi, takich osób potrzeba. Pełne zaangażowanie z jego strony przyniosło efekty, o których nie śniłem." },
    Review { author: "Bartosz", text: "Profesjonalne podejście trenerskie, zero obijania się, kontrola przy ćwiczeniach. Rezultat powyżej oczekiwania." },
    Review { author: "Dominik", text: "Mateusz to świetny trener personalny, profesjonalny, zaangażowany i motywujący. Dzięki niemu osiągnąłem swoje cele szybciej, niż się spodziewałem. Zdecydowanie polecam!!" },
    Review { author: "Maciej", text: "Serdecznie polecam współpracę z Mateuszem! Treningi są zawsze dobrze zaplanowane, dostosowane do moich celów i możliwości." },
    Review { author: "Kamil", text: "Naprawdę sympatyczny trener, mega mi pomógł, naprawdę da się z nim dogadać." },
    Review { author: "Wojciech", text: "Serdecznie polecam, dzięki trenerowi Mateuszowi wyszedłem ze swojej strefy komfortu i poprawiłem swoje życie." },
    Review { author: "Patrycja", text: "Pełen profesjonalizm, polecam 😀" },
    Review { author: "Sara", text: "Profesjonalista 💪 polecam z czystym sumieniem ☺️" },
    Review { author: "Ksawery", text: "Mateusz to świetny trener, który nie tylko mega motywuje, ale też układa skuteczne plany." },
    Review { author: "Seweryn", text: "Świetna robota! Trener zrobił mi plan treningowy, który naprawdę działa." },
    Review { author: "Milena", text: "Jestem bardzo zadowolona ze współpracy, z miłą chęcią polecam!" },
    Review { author: "Miłosz", text: "Rewelacyjna współpraca! Trener stworzył dla mnie plan treningowy, który działa i daje satysfakcję." },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry { question: "Czy współpraca jest dla początkujących?", answer: "Tak. Na starcie robię audyt, a plany dostosowuję do Twojego poziomu i sprzętu." },
    FaqEntry { question: "Jak wygląda kontakt?", answer: "W zależności od pakietu: raporty co 4/2/1 tydzień + stały kontakt w razie pytań (Essential Plus/PRO)." },
    FaqEntry { question: "Czy mogę trenować w domu?", answer: "Tak – dostosowuję plan do dostępnego sprzętu i czasu, przygotuję również alternatywy ćwiczeń." },
    FaqEntry { question: "Jak wygląda pierwszy miesiąc współpracy?", answer: "Start od audytu, plan + edukacja, cotygodniowy/2-tyg./4-tyg. raport wg pakietu, modyfikacje na bieżąco." },
    FaqEntry { question: "Jak długo trwa współpraca?", answer: "Minimalnie 3 miesiące, by zobaczyć pełne efekty." },
    FaqEntry { question: "Jak płacę?", answer: "Płatności online przez Przelewy24. Po opłaceniu dostaniesz link do pobrania e-booka." },
];

pub const METAMORPHOSES: &[Metamorphosis] = &[
    Metamorphosis {
        before: "/assets/metamorfoza1-przed.jpg",
        after: "/assets/metamorfoza1-po.jpg",
        caption: "12 tygodni redukcji, -9 kg",
    },
    Metamorphosis {
        before: "/assets/metamorfoza2-przed.jpg",
        after: "/assets/metamorfoza2-po.jpg",
        caption: "6 miesięcy budowy sylwetki",
    },
];
