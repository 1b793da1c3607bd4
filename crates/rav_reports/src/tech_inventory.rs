//! Inventory of paid services, providers and tooling with a cost estimate.

use rav_docs::{BrandedDocument, Logo};

use crate::GenerationContext;

pub const FILE_NAME: &str = "RAV-Technology-Inventory-02262026.docx";
pub const DOC_TITLE: &str = "Technology & Tools Inventory";

pub fn build(ctx: &GenerationContext) -> BrandedDocument {
    let mut doc = BrandedDocument::new(DOC_TITLE);
    let date = ctx.today.format("%B %d, %Y").to_string();
    masthead(&mut doc, ctx.logo.as_ref(), &date);
    subscription_paid_services(&mut doc);
    integrated_providers(&mut doc);
    free_external_apis(&mut doc);
    not_yet_integrated_in_code(&mut doc);
    open_source_development_tools(&mut doc);
    monthly_cost_estimate(&mut doc);
    environment_configuration_summary(&mut doc);
    architecture_overview(&mut doc);
    doc.footer(format!(
        "Rent-A-Vacation • Technology Inventory • Confidential • {}",
        ctx.today.format("%B %Y")
    ));
    doc
}

fn masthead(doc: &mut BrandedDocument, logo: Option<&Logo>, date: &str) {
    doc.logo_header(Some(DOC_TITLE), logo)
        .page_numbers()
        .metadata(&[
            ("Date", date),
            ("Version", "1.0"),
            ("Classification", "Internal — Business Operations"),
            ("Prepared by", "RAV Engineering Team"),
        ]);
}

fn subscription_paid_services(doc: &mut BrandedDocument) {
    doc.heading(1, "1. Subscription & Paid Services")
        .body("These are the external SaaS products and services that RAV depends on. Most operate on free tiers during pre-launch; costs scale with usage post-launch.")
        .table(
            &["#", "Service", "Purpose", "Free Tier", "Paid Tier", "Status"],
            &[
                ["1", "Claude Max (Anthropic)", "AI coding assistant (Claude Code)", "—", "$100–200/mo", "Active"],
                ["2", "Supabase", "Database, Auth, Edge Functions, Storage", "500MB DB, 50K users, 500K invocations", "$25/mo (Pro)", "Active (DEV + PROD)"],
                ["3", "Vercel", "Frontend hosting, CDN, preview deploys", "100GB bandwidth, 6K build min/mo", "$20/mo (Pro)", "Active"],
                ["4", "Stripe", "Payments, Connect payouts, Tax", "No platform fee", "2.9% + $0.30 per txn", "Active"],
                ["5", "VAPI.ai", "Voice assistant (Deepgram + ElevenLabs + OpenAI)", "10 min/mo", "~$0.05–0.15/min", "Active"],
                ["6", "OpenRouter", "Text chat LLM (Gemini 3 Flash)", "Free tier models", "~$0.50/M tokens", "Active"],
                ["7", "Resend", "Transactional email", "3,000 emails/mo, 1 domain", "$20/mo (5K+)", "Active"],
                ["8", "Sentry", "Error monitoring & performance", "5K errors/mo, 10K transactions", "$26/mo (Team)", "Active"],
                ["9", "Cloudflare", "DNS, email routing (catch-all)", "Free plan", "—", "Active (free)"],
                ["10", "Percy (BrowserStack)", "Visual regression testing", "5K screenshots/mo", "$399/mo (Team)", "Active (CI)"],
                ["11", "Qase.io", "Test case management & reporting", "500 test cases, 3 users", "$36/mo (Startup)", "Active (CI)"],
                ["12", "NewsAPI", "Industry news feed (exec dashboard)", "100 req/day (dev only)", "$449/mo (Business)", "Active (dev key)"],
                ["13", "PostHog", "Product analytics & user behavior", "1M events/mo", "$1,600/yr (Scale Add-on)", "Active (coupon thru Jan 2027)"],
                ["14", "AirDNA", "Vacation rental market intelligence (BYOK)", "—", "~$250–500/mo (user-paid)", "Planned — BYOK model"],
                ["15", "STR Global", "Short-term rental benchmarks (BYOK)", "—", "Custom pricing (user-paid)", "Planned — BYOK model"],
                ["16", "Canva", "Marketing assets, brand design", "Free tier", "$13/mo (Pro)", "Used for design"],
                ["17", "GitHub", "Repo, Issues, Actions CI/CD", "Free (public), 2K Actions min/mo", "$4/user/mo (Team)", "Active"],
            ],
        );
}

fn integrated_providers(doc: &mut BrandedDocument) {
    doc.heading(1, "2. Integrated Providers")
        .body("These are billed through a primary service listed above — you do not pay them separately.")
        .table(
            &["Provider", "Billed Via", "What It Does"],
            &[
                ["Deepgram", "VAPI", "Speech-to-text (STT)"],
                ["ElevenLabs", "VAPI", "Text-to-speech (TTS)"],
                ["OpenAI GPT-4o-mini", "VAPI", "Voice assistant LLM"],
                ["Google Gemini 3 Flash", "OpenRouter", "Text chat LLM"],
                ["Google OAuth 2.0", "Supabase Auth", "Social login (Sign in with Google)"],
                ["PostgreSQL", "Supabase", "Relational database engine"],
                ["Deno Deploy", "Supabase", "Edge function runtime"],
                ["Let’s Encrypt", "Vercel", "SSL/TLS certificates"],
            ],
        );
}

fn free_external_apis(doc: &mut BrandedDocument) {
    doc.heading(1, "3. Free External APIs")
        .body("No account or subscription required for these services.")
        .table(
            &["Service", "What It Does", "Notes"],
            &[
                ["FRED API (Federal Reserve)", "Economic indicators for exec dashboard", "Public API, no key required"],
                ["Google Fonts", "Roboto font family", "CDN-hosted, free"],
                ["Unsplash", "Stock property & destination photos", "Free for commercial use with attribution"],
            ],
        );
}

fn not_yet_integrated_in_code(doc: &mut BrandedDocument) {
    doc.heading(1, "4. Not Yet Integrated in Code")
        .body("These services have accounts, code scaffolding, or open GitHub issues but are not yet fully wired into the application.")
        .table(
            &["Service", "Purpose", "Integration Status", "GitHub Issue"],
            &[
                ["Google Analytics (GA4)", "Traffic analytics & marketing attribution", "Not implemented", "#74"],
                ["AirDNA", "Live market data for exec dashboard", "BYOK: edge function + settings UI exist, awaiting user API key", "—"],
                ["STR Global", "Live rental benchmarks for exec dashboard", "BYOK: edge function + settings UI exist, awaiting user API key", "—"],
            ],
        )
        .spacer()
        .blockquote("BYOK (Bring Your Own Key): AirDNA and STR Global use a model where the admin enters their own API key via the Executive Dashboard → Integration Settings panel. RAV does not pay for these subscriptions — they are user-paid. The platform shows demo data until a key is provided.");
}

fn open_source_development_tools(doc: &mut BrandedDocument) {
    doc.heading(1, "5. Open Source & Development Tools")
        .body("Free, open-source tools used in the development stack. No subscription cost.")
        .table(
            &["Category", "Tools"],
            &[
                ["Frontend Framework", "React 18, TypeScript 5.8, Vite 5.4"],
                ["Styling", "Tailwind CSS 3.4, shadcn/ui (Radix UI primitives)"],
                ["State & Data", "TanStack React Query, React Hook Form, Zod"],
                ["UI Components", "Lucide icons, Recharts, Mermaid, date-fns, Embla Carousel"],
                ["Testing", "Vitest, Playwright, Testing Library, jsdom"],
                ["Code Quality", "ESLint 9, Husky, lint-staged"],
                ["PWA", "vite-plugin-pwa, Workbox (offline support, installable app)"],
            ],
        );
}

fn monthly_cost_estimate(doc: &mut BrandedDocument) {
    doc.heading(1, "6. Monthly Cost Estimate (Pre-Launch)")
        .body("Estimated costs while the platform is in pre-launch / Staff Only Mode with minimal traffic.")
        .table(
            &["Service", "Estimated Cost", "Notes"],
            &[
                ["Claude Max", "$100–200", "Primary development tool"],
                ["Supabase (2 projects)", "$0–50", "Free tier covers pre-launch"],
                ["Vercel", "$0–20", "Free tier likely sufficient initially"],
                ["Stripe", "$0", "Only charges per transaction"],
                ["VAPI", "$0–10", "Minimal voice usage pre-launch"],
                ["OpenRouter", "$0–5", "Gemini Flash is very cheap"],
                ["Resend", "$0", "Free tier (3,000 emails/mo)"],
                ["Sentry", "$0", "Free tier (5K errors/mo)"],
                ["Cloudflare", "$0", "Free plan"],
                ["Percy", "$0", "Free tier for CI"],
                ["Qase", "$0", "Free tier"],
                ["PostHog", "$0", "Coupon until Jan 2027; then ~$133/mo ($1,600/yr)"],
                ["AirDNA", "$0", "BYOK — user-paid, not a RAV expense"],
                ["STR Global", "$0", "BYOK — user-paid, not a RAV expense"],
                ["NewsAPI", "$0", "Dev key (prod needs $449/mo or alternative)"],
                ["GitHub", "$0", "Free for current usage"],
                ["Canva", "$0–13", "Optional"],
                ["TOTAL", "$100–300/mo", "Pre-launch; mostly Claude Max"],
            ],
        )
        .spacer()
        .blockquote("Post-launch costs scale with usage — mainly Stripe (per-transaction), Supabase (DB size + edge invocations), Vercel (bandwidth), and VAPI (voice minutes). PostHog coupon expires Jan 21, 2027 — then $1,600/yr. AirDNA and STR Global are BYOK (user-paid, not a RAV expense).");
}

fn environment_configuration_summary(doc: &mut BrandedDocument) {
    doc.heading(1, "7. Environment Configuration Summary")
        .heading(2, "Frontend Environment Variables (.env.local / Vercel)")
        .table(
            &["Variable", "Service", "Set In"],
            &[
                ["VITE_SUPABASE_URL", "Supabase", ".env.local + Vercel"],
                ["VITE_SUPABASE_ANON_KEY", "Supabase", ".env.local + Vercel"],
                ["VITE_VAPI_PUBLIC_KEY", "VAPI", ".env.local + Vercel"],
                ["VITE_VAPI_ASSISTANT_ID", "VAPI", ".env.local + Vercel"],
                ["VITE_SENTRY_DSN", "Sentry", ".env.local + Vercel"],
                ["VITE_FEATURE_VOICE_ENABLED", "Feature flag", ".env.local + Vercel"],
            ],
        )
        .heading(2, "Backend Secrets (Supabase Edge Functions)")
        .table(
            &["Secret", "Service", "Used By"],
            &[
                ["STRIPE_SECRET_KEY", "Stripe", "Checkout, payouts, refunds, webhooks"],
                ["STRIPE_WEBHOOK_SECRET", "Stripe", "Webhook signature verification"],
                ["RESEND_API_KEY", "Resend", "All transactional emails"],
                ["OPENROUTER_API_KEY", "OpenRouter", "Text chat (RAVIO)"],
                ["NEWSAPI_KEY", "NewsAPI", "Industry news feed (optional)"],
                ["SUPABASE_SERVICE_ROLE_KEY", "Supabase", "Admin operations in edge functions"],
                ["IS_DEV_ENVIRONMENT", "Internal", "Guards seed data in production"],
            ],
        )
        .heading(2, "CI/CD Secrets (GitHub Actions)")
        .table(
            &["Secret", "Service", "Used By"],
            &[
                ["PERCY_TOKEN", "Percy", "Visual regression tests"],
                ["QASE_API_TOKEN", "Qase", "Test reporting"],
                ["SUPABASE_URL", "Supabase", "CI test environment"],
                ["SUPABASE_ANON_KEY", "Supabase", "CI test environment"],
                ["RESEND_GITHUB_NOTIFICATIONS_KEY", "Resend", "Issue email notifications"],
            ],
        );
}

fn architecture_overview(doc: &mut BrandedDocument) {
    doc.heading(1, "8. Architecture Overview")
        .table(
            &["Layer", "Technology", "Details"],
            &[
                ["Frontend", "React + TypeScript + Vite", "SPA deployed on Vercel CDN"],
                ["UI Library", "Tailwind CSS + shadcn/ui", "Utility-first CSS + Radix primitives"],
                ["Backend", "Supabase", "PostgreSQL + PostgREST API + Auth + Edge Functions"],
                ["Edge Functions", "Deno (TypeScript)", "24 serverless functions for business logic"],
                ["Payments", "Stripe", "Checkout, Connect (owner payouts), webhooks, tax"],
                ["Voice AI", "VAPI → Deepgram + ElevenLabs + OpenAI", "Browser-based voice search"],
                ["Text AI", "OpenRouter → Gemini 3 Flash", "Conversational assistant (RAVIO)"],
                ["Email", "Resend", "Transactional emails (7 templates)"],
                ["Monitoring", "Sentry", "Error tracking + performance"],
                ["Analytics", "PostHog", "Product analytics + user behavior (Scale plan)"],
                ["Market Data", "AirDNA + STR Global", "Rental market intelligence (planned)"],
                ["DNS / CDN", "Cloudflare + Vercel", "DNS routing, email catch-all, edge CDN"],
                ["CI/CD", "GitHub Actions", "Lint, test, visual regression, deploy"],
                ["Testing", "Vitest + Playwright + Percy + Qase", "Unit, E2E, visual, reporting"],
            ],
        );
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ctx() -> GenerationContext {
        GenerationContext::new(NaiveDate::from_ymd_opt(2026, 2, 26).unwrap())
    }

    #[test]
    fn test_paid_services_table_shape() {
        let outline = build(&ctx()).outline();
        let table = outline.table_under("1. Subscription & Paid Services").unwrap();
        assert_eq!(table.columns, 6);
        assert_eq!(table.rows, 17);
    }

    #[test]
    fn test_cost_estimate_ends_with_total() {
        let doc = build(&ctx());
        let outline = doc.outline();
        let table = outline
            .table_under("6. Monthly Cost Estimate (Pre-Launch)")
            .unwrap();
        assert_eq!(table.rows, 18);

        let markdown = rav_docs::markdown::render_markdown(&doc);
        assert!(markdown.contains("| TOTAL | $100–300/mo | Pre-launch; mostly Claude Max |"));
    }

    #[test]
    fn test_eight_top_level_sections() {
        let outline = build(&ctx()).outline();
        let top = outline.headings.iter().filter(|h| h.level == 1).count();
        assert_eq!(top, 8);
    }

    #[test]
    fn test_footer_uses_month_and_year() {
        let markdown = rav_docs::markdown::render_markdown(&build(&ctx()));
        assert!(markdown.contains("Technology Inventory • Confidential • February 2026"));
        assert!(markdown.contains("February 26, 2026"));
    }
}
