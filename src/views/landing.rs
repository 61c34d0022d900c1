// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public landing page.

use super::{escape, page};
use crate::controllers::Notification;
use crate::routes::paths;

/// Pricing period selected on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Billing {
    #[default]
    Monthly,
    Annual,
}

impl Billing {
    /// `annual` selects annual pricing; anything else is monthly.
    pub fn from_param(billing: Option<&str>) -> Self {
        match billing {
            Some("annual") => Billing::Annual,
            _ => Billing::Monthly,
        }
    }
}

struct Feature {
    title: &'static str,
    description: &'static str,
    highlights: [&'static str; 3],
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Smart Homework Help",
        description: "Get step-by-step explanations powered by advanced AI. Understand complex problems with detailed breakdowns.",
        highlights: ["Step-by-step solutions", "Multiple approaches", "Practice problems"],
    },
    Feature {
        title: "Research Assistant",
        description: "Analyze sources, generate citations, and get help with research papers instantly.",
        highlights: ["Source analysis", "Citation generation", "Plagiarism check"],
    },
    Feature {
        title: "Study Planning",
        description: "AI-powered study schedules that adapt to your learning style and goals.",
        highlights: ["Personalized schedules", "Progress tracking", "Smart reminders"],
    },
    Feature {
        title: "Math Solver",
        description: "Advanced mathematics problem-solving with detailed explanations and graphs.",
        highlights: ["Visual solutions", "Step-by-step guides", "Practice exercises"],
    },
    Feature {
        title: "Writing Assistant",
        description: "Enhance your essays with AI-powered suggestions and improvements.",
        highlights: ["Grammar check", "Style suggestions", "Structure analysis"],
    },
    Feature {
        title: "Language Support",
        description: "Multi-language support for international students and language learners.",
        highlights: ["50+ languages", "Translation help", "Cultural context"],
    },
];

/// A pricing tier. Prices are whole dollars per month.
pub struct Plan {
    pub name: &'static str,
    pub monthly: u32,
    pub annual: u32,
    pub description: &'static str,
    /// (text, included)
    pub features: &'static [(&'static str, bool)],
    pub cta: &'static str,
    pub popular: bool,
}

impl Plan {
    pub fn price(&self, billing: Billing) -> u32 {
        match billing {
            Billing::Monthly => self.monthly,
            Billing::Annual => self.annual,
        }
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Free",
        monthly: 0,
        annual: 0,
        description: "Perfect for trying out Lectura",
        features: &[
            ("5 AI-powered explanations per day", true),
            ("Basic homework help", true),
            ("Community support", true),
            ("Limited subject access", true),
            ("Advanced features", false),
            ("Priority support", false),
        ],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Pro",
        monthly: 15,
        annual: 12,
        description: "Most popular for students",
        features: &[
            ("Unlimited AI explanations", true),
            ("Advanced homework help", true),
            ("Priority support 24/7", true),
            ("All subjects access", true),
            ("Research paper assistance", true),
            ("Personalized study plans", true),
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    Plan {
        name: "Team",
        monthly: 49,
        annual: 39,
        description: "Perfect for study groups",
        features: &[
            ("Everything in Pro", true),
            ("5 team member accounts", true),
            ("Team collaboration tools", true),
            ("Shared study materials", true),
            ("Admin dashboard", true),
            ("API access", true),
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    school: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Lectura has completely transformed how I approach my studies. The AI assistance is incredibly intuitive!",
        author: "Sarah Chen",
        role: "Computer Science Student",
        school: "Stanford University",
    },
    Testimonial {
        quote: "The research assistant feature has saved me countless hours on my thesis. It's like having a personal academic advisor.",
        author: "James Wilson",
        role: "Graduate Student",
        school: "Harvard University",
    },
    Testimonial {
        quote: "As an international student, Lectura helps me understand complex topics in my non-native language.",
        author: "Maria Garcia",
        role: "Engineering Student",
        school: "MIT",
    },
];

const STATS: [(&str, &str); 4] = [
    ("100K+", "Active Students"),
    ("95%", "Success Rate"),
    ("50+", "Subjects Covered"),
    ("4.9/5", "Average Rating"),
];

fn features_section() -> String {
    let cards: String = FEATURES
        .iter()
        .map(|f| {
            let items: String = f
                .highlights
                .iter()
                .map(|h| format!("<li>{}</li>", escape(h)))
                .collect();
            format!(
                r#"<div class="card"><h3>{}</h3><p class="muted">{}</p><ul>{items}</ul></div>"#,
                escape(f.title),
                escape(f.description),
            )
        })
        .collect();
    format!(r#"<section id="features"><h2>Features</h2><div class="grid">{cards}</div></section>"#)
}

fn pricing_section(billing: Billing) -> String {
    let toggle = match billing {
        Billing::Monthly => r#"<a href="/?billing=annual#pricing">Switch to annual billing (save 20%)</a>"#,
        Billing::Annual => r#"<a href="/#pricing">Switch to monthly billing</a>"#,
    };

    let cards: String = PLANS
        .iter()
        .map(|plan| {
            let price = plan.price(billing);
            let items: String = plan
                .features
                .iter()
                .map(|(text, included)| {
                    let mark = if *included { "&#10003;" } else { "&#10007;" };
                    format!("<li>{mark} {}</li>", escape(text))
                })
                .collect();
            let note = if billing == Billing::Annual && price > 0 {
                r#"<p class="muted">billed annually</p>"#
            } else {
                ""
            };
            format!(
                r#"<div class="card{popular}"><h3>{name}</h3><p class="muted">{description}</p><p class="price"><strong>${price}</strong>/month</p>{note}<ul>{items}</ul><a class="button" href="{signup}">{cta}</a></div>"#,
                popular = if plan.popular { " popular" } else { "" },
                name = escape(plan.name),
                description = escape(plan.description),
                signup = SIGNUP_URL,
                cta = escape(plan.cta),
            )
        })
        .collect();

    format!(
        r#"<section id="pricing"><h2>Pricing</h2><p>{toggle}</p><div class="grid">{cards}</div></section>"#
    )
}

fn testimonials_section() -> String {
    let cards: String = TESTIMONIALS
        .iter()
        .map(|t| {
            format!(
                r#"<figure class="card"><blockquote>{}</blockquote><figcaption><strong>{}</strong><br><span class="muted">{}, {}</span></figcaption></figure>"#,
                escape(t.quote),
                escape(t.author),
                escape(t.role),
                escape(t.school),
            )
        })
        .collect();
    let stats: String = STATS
        .iter()
        .map(|(value, label)| format!(r#"<div class="card"><strong>{value}</strong><div class="muted">{label}</div></div>"#))
        .collect();
    format!(
        r#"<section id="testimonials"><h2>Testimonials</h2><div class="grid">{stats}</div><div class="grid">{cards}</div></section>"#
    )
}

const SIGNUP_URL: &str = "/auth?mode=signup";

/// Render the landing page.
pub fn render(billing: Billing, notification: Option<&Notification>) -> String {
    let body = format!(
        r##"<div class="container">
<nav class="nav"><a class="brand" href="/">Lectura</a>
<div><a href="#features">Features</a> <a href="#pricing">Pricing</a> <a href="#testimonials">Testimonials</a>
<a class="button secondary" href="{auth}">Sign In</a> <a class="button" href="{signup}">Get Started</a></div></nav>
<header><p class="muted">AI-Powered Learning Assistant</p>
<h1>Your Academic Success Partner</h1>
<p>Transform your learning experience with AI-powered assistance for homework, research, and academic excellence</p>
<a class="button" href="{signup}">Get Started Free</a></header>
{features}
{pricing}
{testimonials}
<footer class="muted"><p>&copy; Lectura. All rights reserved.</p></footer>
</div>"##,
        auth = paths::AUTH,
        signup = SIGNUP_URL,
        features = features_section(),
        pricing = pricing_section(billing),
        testimonials = testimonials_section(),
    );
    page("Lectura - Your Academic Success Partner", notification, &body)
}
