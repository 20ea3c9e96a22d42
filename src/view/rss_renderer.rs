use std::io::Cursor;

use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::feed::{Feed, FeedEntry};
use crate::text_utils::format_rfc2822;

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet href="/rss-styles.xsl" type="text/xsl"?>
<rss version="2.0">
<channel>
  <title>Szacho blog</title>
  <link>https://szacho.github.io</link>
  <description>Notes about machine learning</description>
  <lastBuildDate>Thu, 1 Jun 2023 00:00:00 +0000</lastBuildDate>
  <item>
    <title>B</title>
    <link>https://szacho.github.io/posts/b/</link>
    <guid isPermaLink="true">https://szacho.github.io/posts/b/</guid>
    <description>sB</description>
    <pubDate>Thu, 1 Jun 2023 00:00:00 +0000</pubDate>
    <category>kaggle</category>
  </item>
</channel>
</rss>
*/

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
    pub stylesheet: Option<&'a str>,
}

impl<'a> RssChannel<'a> {
    pub fn from_feed(feed: &'a Feed, stylesheet: Option<&'a str>) -> Self {
        RssChannel {
            ch_title: feed.site.title.as_str(),
            ch_link: feed.site.url.as_str(),
            ch_desc: feed.site.description.as_str(),
            stylesheet,
        }
    }

    /// Writes the entries in the given order.
    pub fn render(&self, entries: &[FeedEntry]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        // <?xml version="1.0" encoding="UTF-8"?>
        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        // <?xml-stylesheet href="/rss-styles.xsl" type="text/xsl"?>
        if let Some(stylesheet) = self.stylesheet {
            let pi = format!(r#"xml-stylesheet href="{}" type="text/xsl""#, escape(stylesheet));
            writer.write_event(Event::PI(BytesPI::new(pi)))?;
        }

        // <rss version="2.0">
        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;

        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;

        // Newest entry date, so unchanged content gives the same document
        if let Some(last) = entries.iter().map(|e| e.pub_date).max() {
            push_text(&mut writer, "lastBuildDate", &format_rfc2822(&last))?;
        }

        for entry in entries {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", entry.title.as_str())?;

            let link = full_link(self.ch_link, entry.link.as_str());
            push_text(&mut writer, "link", link.as_str())?;

            // <guid isPermaLink="true">https://szacho.github.io/posts/b/</guid>
            let mut guid_elem = BytesStart::new("guid");
            guid_elem.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid_elem))?;
            writer.write_event(Event::Text(BytesText::new(link.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            push_text(&mut writer, "description", entry.description.as_str())?;
            push_text(&mut writer, "pubDate", &format_rfc2822(&entry.pub_date))?;

            for category in entry.categories.iter() {
                push_text(&mut writer, "category", category.as_str())?;
            }

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn full_link(base_url: &str, link: &str) -> String {
    if link.contains("://") {
        return link.to_string();
    }

    let base_url = base_url.trim_end_matches('/');
    let link = link.trim_start_matches('/');

    format!("{}/{}", base_url, link)
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str;

    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    use super::*;

    fn create_entry(id: &str, day: u32) -> FeedEntry {
        let dt = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2024, 01, day).unwrap(),
            NaiveTime::from_hms_opt(5, 6, 7).unwrap(),
        );
        FeedEntry {
            link: format!("/posts/post-{}/", id),
            title: format!("title-of-post-{}", id),
            pub_date: dt,
            description: format!("summary-of-post-{}", id),
            categories: vec![format!("tag-{}", id)],
        }
    }

    #[test]
    fn render_xml() {
        let entries = vec![create_entry("2", 3), create_entry("1", 2)];

        let rss = RssChannel {
            ch_title: "my feed",
            ch_link: "https://szacho.github.io/",
            ch_desc: "My blog feed",
            stylesheet: Some("/rss-styles.xsl"),
        };
        let xml = rss.render(&entries).unwrap();
        assert_eq!(str::from_utf8(&xml).unwrap(), EXPECTED);
    }

    #[test]
    fn render_empty_feed() {
        let rss = RssChannel {
            ch_title: "my feed",
            ch_link: "https://szacho.github.io",
            ch_desc: "My blog feed",
            stylesheet: None,
        };
        let xml = rss.render(&[]).unwrap();
        assert_eq!(
            str::from_utf8(&xml).unwrap(),
            r##"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>my feed</title><link>https://szacho.github.io</link><description>My blog feed</description></channel></rss>"##
        );
    }

    #[test]
    fn render_escapes_text() {
        let mut entry = create_entry("1", 2);
        entry.title = "Rust & <XML>".to_string();
        let rss = RssChannel {
            ch_title: "t",
            ch_link: "https://szacho.github.io",
            ch_desc: "d",
            stylesheet: None,
        };
        let xml = String::from_utf8(rss.render(&[entry]).unwrap()).unwrap();
        assert!(xml.contains("<title>Rust &amp; &lt;XML&gt;</title>"));
    }

    #[test]
    fn test_full_link() {
        assert_eq!(full_link("https://szacho.github.io", "/posts/a/"), "https://szacho.github.io/posts/a/");
        assert_eq!(full_link("https://szacho.github.io/", "/posts/a/"), "https://szacho.github.io/posts/a/");
        assert_eq!(full_link("https://szacho.github.io/blog/", "/posts/a/"), "https://szacho.github.io/blog/posts/a/");
        assert_eq!(full_link("https://szacho.github.io", "https://other.site/x/"), "https://other.site/x/");
    }

    const EXPECTED: &str = r##"<?xml version="1.0" encoding="UTF-8"?><?xml-stylesheet href="/rss-styles.xsl" type="text/xsl"?><rss version="2.0"><channel><title>my feed</title><link>https://szacho.github.io/</link><description>My blog feed</description><lastBuildDate>Wed, 3 Jan 2024 05:06:07 +0000</lastBuildDate><item><title>title-of-post-2</title><link>https://szacho.github.io/posts/post-2/</link><guid isPermaLink="true">https://szacho.github.io/posts/post-2/</guid><description>summary-of-post-2</description><pubDate>Wed, 3 Jan 2024 05:06:07 +0000</pubDate><category>tag-2</category></item><item><title>title-of-post-1</title><link>https://szacho.github.io/posts/post-1/</link><guid isPermaLink="true">https://szacho.github.io/posts/post-1/</guid><description>summary-of-post-1</description><pubDate>Tue, 2 Jan 2024 05:06:07 +0000</pubDate><category>tag-1</category></item></channel></rss>"##;
}
