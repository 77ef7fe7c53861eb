mod html_tests;

/// A small but complete page used across the extraction tests
pub(crate) const SAMPLE_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Rust SEO Toolkit: Analyze Pages Quickly</title>
  <meta name="description" content="Score keywords and readability for any page.">
  <meta property="og:title" content="Rust SEO Toolkit">
  <meta property="og:image" content="https://example.com/card.png">
  <meta name="twitter:card" content="summary_large_image">
  <style>.hidden { display: none; }</style>
</head>
<body>
  <h1>Rust SEO Toolkit</h1>
  <h2>Keywords</h2>
  <p>Keyword scoring highlights what a page is about.</p>
  <h2>Readability</h2>
  <p>Readability scoring keeps copy approachable.</p>
  <img src="/images/logo.png" width="120" height="40">
  <img src="chart.png" alt="">
  <img src="https://cdn.example.net/hero.jpg">
  <a href="/docs">Docs</a>
  <a href="https://example.com/blog">Blog</a>
  <a href="https://crates.io/">Crates</a>
  <a href="#top">Top</a>
  <script>var keyword = "ignored";</script>
</body>
</html>
"##;
