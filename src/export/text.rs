/// Replaces characters outside Latin-1 with `?`, as the report's built-in
/// fonts cannot show them.
pub fn to_latin1(text: &str) -> String {
	text.chars()
		.map(|c| if (c as u32) <= 0xff { c } else { '?' })
		.collect()
}

/// Cuts `text` to at most `max_chars`, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_string();
	}
	let keep = max_chars.saturating_sub(3);
	let mut out: String = text.chars().take(keep).collect();
	out.push_str("...");
	out
}

/// Greedy word wrap to lines of at most `max_chars`. Words longer than a
/// line are split.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
	let max_chars = max_chars.max(1);
	let mut lines = Vec::new();
	let mut line = String::new();

	for word in text.split_whitespace() {
		let mut word: Vec<char> = word.chars().collect();
		while word.len() > max_chars {
			if !line.is_empty() {
				lines.push(std::mem::take(&mut line));
			}
			lines.push(word.drain(..max_chars).collect());
		}
		let word: String = word.into_iter().collect();
		if word.is_empty() {
			continue;
		}

		let needed = if line.is_empty() {
			word.chars().count()
		} else {
			line.chars().count() + 1 + word.chars().count()
		};
		if needed > max_chars {
			lines.push(std::mem::take(&mut line));
		}
		if !line.is_empty() {
			line.push(' ');
		}
		line.push_str(&word);
	}
	if !line.is_empty() {
		lines.push(line);
	}
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn latin1_replacement() {
		assert_eq!(to_latin1("drug–target"), "drug?target");
		assert_eq!(to_latin1("Sjögren"), "Sjögren");
		assert_eq!(to_latin1("β-blocker"), "?-blocker");
	}

	#[test]
	fn truncation() {
		assert_eq!(truncate("Aspirin", 10), "Aspirin");
		assert_eq!(truncate("Acetylsalicylic acid", 10), "Acetyls...");
	}

	#[test]
	fn wrapping() {
		assert_eq!(
			wrap("one two three four", 9),
			vec!["one two".to_string(), "three".into(), "four".into()]
		);
		assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
		assert!(wrap("   ", 10).is_empty());
	}
}
