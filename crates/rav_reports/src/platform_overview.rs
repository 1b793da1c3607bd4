//! One-page "what's been built" overview, stamped with the generation date.

use chrono::NaiveDate;
use rav_docs::{BrandedDocument, Logo};

use crate::GenerationContext;

pub const DOC_TITLE: &str = "Platform Overview — What’s Been Built";

/// `RAV-Platform-Overview-MMDDYYYY.docx`
pub fn file_name(date: NaiveDate) -> String {
    format!("RAV-Platform-Overview-{}.docx", date.format("%m%d%Y"))
}

/// `February 26, 2026`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

const FEATURES_BUILT: [[&str; 2]; 20] = [
    ["Auth", "Email/password + Google OAuth, role-based access (6 roles), email verification, user approval workflow"],
    ["Listings", "Create/edit listings, nightly pricing, fair value scoring, photo uploads, per-night rate with auto price calculation"],
    ["Bidding", "Bid on listings, propose alternate dates, 24hr expiry, owner accept/reject/counter"],
    ["Booking", "Stripe Checkout, fee breakdown (base + service + cleaning + tax), booking confirmation flow"],
    ["Payments", "Stripe Connect (owner onboarding + payouts), webhooks (6 events), escrow management"],
    ["Cancellation", "Policy-based (flexible/moderate/strict/super_strict) renter cancellation, owner cancellation with full refund, Stripe refunds"],
    ["Escrow", "6-status lifecycle, owner confirmation, RAV verification, auto-release after checkout+5d, hold/unhold, refund"],
    ["Disputes", "Renter can file disputes, admin queue with assignment, resolution with refund"],
    ["Voice Search", "VAPI integration, tier-based quotas, admin overrides, usage dashboard, search logging"],
    ["Text Chat", "RAVIO AI assistant via OpenRouter"],
    ["Calculator", "Maintenance fee breakeven calculator for 9 brands"],
    ["Travel Requests", "Travelers post what they want, auto-matched when listings appear"],
    ["Owner Dashboard", "Earnings, bookings, listings management, Stripe Connect status, escrow visibility"],
    ["Admin Dashboard", "8-tab dashboard with cross-entity linking, search, date filters, bulk actions, notes, age badges, dispute assignment"],
    ["Executive Dashboard", "Marketplace health metrics, industry feed"],
    ["SEO", "Meta tags, sitemap, robots.txt, FAQ JSON-LD, OG images"],
    ["Security", "CSP headers, rate limiting (7 edge functions), RLS policies"],
    ["GDPR", "Data export, account deletion with 14-day grace period, cookie consent"],
    ["Architecture", "Auto-generated flow diagrams from declarative manifests"],
    ["PWA", "Service worker, installable, offline-capable"],
];

pub fn build(ctx: &GenerationContext) -> BrandedDocument {
    let date = long_date(ctx.today);
    let mut doc = BrandedDocument::new(DOC_TITLE);
    masthead(&mut doc, ctx.logo.as_ref(), &date);
    what_it_is(&mut doc);
    user_journeys(&mut doc);
    features_built(&mut doc);
    current_numbers(&mut doc);
    remaining_items(&mut doc);
    platform_state(&mut doc);
    doc.footer(format!(
        "Rent-A-Vacation • Confidential • Generated {date}"
    ));
    doc
}

fn masthead(doc: &mut BrandedDocument, logo: Option<&Logo>, date: &str) {
    doc.logo_header(Some(DOC_TITLE), logo)
        .page_numbers()
        .metadata(&[
            ("Date", date),
            ("Version", "v0.9.0 (Pre-Launch)"),
            ("Website", "https://rent-a-vacation.com"),
            ("Repository", "github.com/rent-a-vacation/rav-website"),
        ]);
}

fn what_it_is(doc: &mut BrandedDocument) {
    doc.heading(1, "What It Is")
        .body(
            "A marketplace where timeshare owners can rent out their unused vacation weeks \
             to travelers, with RAV earning a 15% commission. Think Airbnb, but specifically \
             for timeshare inventory across Hilton, Marriott, Disney, and 6 other vacation \
             club brands (117 resorts total).",
        )
        .heading(1, "Tech Stack")
        .bullet_list(&[
            "Frontend: React + TypeScript + Vite + Tailwind + shadcn/ui",
            "Backend: Supabase (PostgreSQL, Auth, Edge Functions, RLS)",
            "Payments: Stripe (checkout, Connect payouts, webhooks)",
            "Voice: VAPI (Deepgram STT + GPT-4o-mini + ElevenLabs TTS)",
            "Text Chat: OpenRouter (RAVIO assistant)",
            "Deployment: Vercel (frontend) + Supabase (backend)",
        ])
        .horizontal_rule();
}

fn user_journeys(doc: &mut BrandedDocument) {
    doc.heading(1, "Core User Journeys")
        .heading(2, "Property Owner Flow")
        .numbered_list(&[
            "Sign up → pending approval by RAV admin",
            "Add property (9 brands supported) → create listing with nightly rate",
            "Listing goes to pending_approval → RAV admin approves/rejects",
            "Once booked → owner confirms resort reservation → RAV verifies → escrow holds funds",
            "After checkout + 5 days → funds released → Stripe Connect payout",
        ])
        .heading(2, "Traveler Flow")
        .numbered_list(&[
            "Browse/search listings (voice search, text chat, filters)",
            "View property details with fair value scoring",
            "Place bids or propose alternate dates",
            "Checkout via Stripe → booking confirmed",
            "Track booking in My Bookings, file disputes if needed",
        ])
        .heading(2, "Admin Flow")
        .numbered_list(&[
            "Dashboard with tabs: Users, Listings, Bookings, Escrow, Payouts, Financials, Disputes, Voice",
            "Approve/reject listings and users (now with bulk actions)",
            "Manage escrow lifecycle (verify, hold, release, refund)",
            "Dispute resolution queue with assignment",
            "Voice search monitoring and quota management",
        ])
        .horizontal_rule();
}

fn features_built(doc: &mut BrandedDocument) {
    doc.heading(1, "Features Built Across 24+ Sessions")
        .table(&["Area", "What’s Built"], &FEATURES_BUILT)
        .horizontal_rule();
}

fn current_numbers(doc: &mut BrandedDocument) {
    doc.heading(1, "Current Numbers")
        .table(
            &["Metric", "Count"],
            &[
                ["Automated tests", "402 (all passing)"],
                ["Database migrations", "31 (DEV), 23 (PROD)"],
                ["Edge functions", "24"],
                ["Supabase RLS policies", "Extensive across all tables"],
                ["Pages / routes", "~20"],
                ["Commits on dev ahead of main", "Many — needs a PR to merge"],
            ],
        )
        .horizontal_rule();
}

fn remaining_items(doc: &mut BrandedDocument) {
    doc.heading(1, "Remaining Pre-Launch Items")
        .body("6 open issues remain before the platform can go live:")
        .table(
            &["#", "Issue", "Status"],
            &[
                ["#127", "Business Formation & Stripe Tax Activation", "Blocked on LLC / EIN"],
                ["#87", "Launch readiness checklist", "Ready when other items close"],
                ["#80", "Legal review: ToS and Privacy Policy", "Needs lawyer review"],
                ["#74", "Google Analytics (GA4) Integration", "Not started"],
                ["#64", "1099-K Compliance", "Not started"],
                ["#62", "Admin Tax Reporting", "Not started"],
            ],
        )
        .horizontal_rule();
}

fn platform_state(doc: &mut BrandedDocument) {
    doc.heading(1, "Current Platform State").bullet_list(&[
        "PROD: Staff Only Mode enabled — platform locked for internal testing",
        "Stripe Tax: Code ready but not activated in Stripe Dashboard (blocked on #127)",
        "GitHub Actions: Issue Notifications workflow temporarily disabled (Resend quota)",
        "Supabase CLI: Currently linked to DEV project",
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> GenerationContext {
        GenerationContext::new(NaiveDate::from_ymd_opt(2026, 2, 26).unwrap())
    }

    #[test]
    fn test_file_name_uses_mmddyyyy() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(file_name(date), "RAV-Platform-Overview-03052026.docx");
    }

    #[test]
    fn test_long_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(long_date(date), "March 05, 2026");
    }

    #[test]
    fn test_features_table_has_twenty_rows() {
        let outline = build(&ctx()).outline();
        let table = outline
            .table_under("Features Built Across 24+ Sessions")
            .unwrap();
        assert_eq!(table.columns, 2);
        assert_eq!(table.rows, 20);
    }

    #[test]
    fn test_section_order() {
        let outline = build(&ctx()).outline();
        let top: Vec<&str> = outline
            .headings
            .iter()
            .filter(|h| h.level == 1)
            .map(|h| h.text.as_str())
            .collect();
        assert_eq!(
            top,
            vec![
                "What It Is",
                "Tech Stack",
                "Core User Journeys",
                "Features Built Across 24+ Sessions",
                "Current Numbers",
                "Remaining Pre-Launch Items",
                "Current Platform State",
            ]
        );
    }

    #[test]
    fn test_footer_carries_generation_date() {
        let markdown = rav_docs::markdown::render_markdown(&build(&ctx()));
        assert!(markdown.contains("Generated February 26, 2026"));
        assert!(markdown.contains("Date:** February 26, 2026"));
    }
}
