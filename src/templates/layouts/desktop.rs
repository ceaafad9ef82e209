use maud::{html, Markup, DOCTYPE, PreEscaped};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #1f2937; }
header { display: flex; align-items: center; gap: .75rem; padding: .75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
main { max-width: 72rem; margin: 2rem auto; padding: 0 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 2rem; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: .75rem; padding: 1.5rem; margin-bottom: 1.5rem; }
label { display: block; font-size: .875rem; font-weight: 500; margin: .75rem 0 .25rem; }
input[type=text], input[type=password], textarea { width: 100%; box-sizing: border-box; padding: .5rem; border: 1px solid #d1d5db; border-radius: .5rem; }
button, .btn { display: inline-block; padding: .6rem 1.2rem; border: 0; border-radius: .5rem; background: #524ed2; color: #fff; text-decoration: none; cursor: pointer; }
.btn-secondary { background: #e5e7eb; color: #1f2937; }
.scores { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.score-card { border-radius: .75rem; padding: 1rem; text-align: center; border: 1px solid #e5e7eb; }
.score-card .value { font-size: 2rem; font-weight: 600; margin: .25rem 0; }
.score-high { background: #ecfdf5; } .score-medium { background: #fffbeb; } .score-low { background: #fef2f2; }
.total { border: 2px solid #c7d2fe; }
.chips { display: flex; flex-wrap: wrap; gap: .5rem; padding: 0; list-style: none; }
.chip { padding: .2rem .75rem; border-radius: 999px; font-size: .875rem; background: #eef2ff; color: #4338ca; }
.chip-seller_motivation { background: #ecfdf5; color: #047857; }
.chip-transaction_complexity { background: #fffbeb; color: #b45309; }
.chip-property_characteristics { background: #eff6ff; color: #1d4ed8; }
.notice { padding: .75rem 1rem; border-radius: .75rem; margin-bottom: 1.5rem; }
.notice-error { background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; }
.notice-info { background: #eff6ff; color: #1d4ed8; border: 1px solid #dbeafe; }
.muted { color: #6b7280; font-style: italic; }
pre { background: #f4f4f4; padding: 1rem; border-radius: .5rem; overflow-x: auto; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="AI-powered commercial real estate deal finder";
                title { (title) " | CRE Deal Finder" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path d="M3 21h18" {}
                        path d="M5 21V7l8-4v18" {}
                        path d="M19 21V11l-6-4" {}
                    }
                    h3 { a href="/" { "CRE Deal Finder" } }
                }
                main { (content) }
            }
        }
    }
}
