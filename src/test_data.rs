#[cfg(test)]
pub const POST_DATA: &str = "---
title: What I learned after 20+ years of software development
date: 2022-04-02 12:05:00
short: How to be a great software engineer?
tags: [career, software]
image: ./cover.png
---

How to be a great software engineer?

Someone asked me this question today and I didn’t have an answer. After thinking for a while, I came up with a list of what I try to do myself.

## Non technical

### Have a honest image of yourself
";

#[cfg(test)]
pub const POST_DATA_NO_DATE: &str = "---
title: Creating a daemon in System D
short: So, you created your awesome server-side application
tags:
  - linux
image: ./daemon.png
---

So, you created your awesome server-side application and you are ready to start using it.
";

#[cfg(test)]
pub fn post_doc(title: &str, date: &str, short: &str) -> String {
    format!("---\ntitle: {}\ndate: {}\nshort: {}\ntags: []\nimage: cover.png\n---\n\nBody of {}\n", title, date, short, title)
}
