use memchr::memmem;
use smallvec::SmallVec;

use super::TemplatePart;

pub type CaptureList<'p> = SmallVec<[&'p str; 4]>;

// shortest capture first; one trailing `/` may be left unconsumed
#[tracing::instrument(level = "trace", skip(path, parts), fields(path=%path, parts=parts.len() as u64))]
pub fn match_path<'p>(path: &'p str, parts: &[TemplatePart]) -> Option<CaptureList<'p>> {
    let mut out = CaptureList::new();
    if match_from(path, 0, parts, &mut out) {
        Some(out)
    } else {
        None
    }
}

fn match_from<'p>(
    path: &'p str,
    pos: usize,
    parts: &[TemplatePart],
    out: &mut CaptureList<'p>,
) -> bool {
    let Some((first, rest)) = parts.split_first() else {
        let tail = &path[pos..];
        return tail.is_empty() || tail == "/";
    };

    match first {
        TemplatePart::Literal(lit) => {
            path[pos..].starts_with(lit.as_str())
                && match_from(path, pos + lit.len(), rest, out)
        }
        TemplatePart::Param(_) => match rest.first() {
            Some(TemplatePart::Literal(next)) => {
                let bytes = path.as_bytes();
                let finder = memmem::Finder::new(next.as_bytes());
                let mut from = pos;
                while from <= bytes.len() {
                    let Some(rel) = finder.find(&bytes[from..]) else {
                        return false;
                    };
                    let end = from + rel;
                    if try_capture(path, pos, end, rest, out) {
                        return true;
                    }
                    from = end + 1;
                }
                false
            }
            Some(TemplatePart::Param(_)) => {
                let ends = path[pos..]
                    .char_indices()
                    .map(|(offset, _)| pos + offset)
                    .chain(std::iter::once(path.len()));
                for end in ends {
                    if try_capture(path, pos, end, rest, out) {
                        return true;
                    }
                }
                false
            }
            None => {
                if path.len() > pos
                    && path.ends_with('/')
                    && try_capture(path, pos, path.len() - 1, rest, out)
                {
                    return true;
                }
                try_capture(path, pos, path.len(), rest, out)
            }
        },
    }
}

fn try_capture<'p>(
    path: &'p str,
    start: usize,
    end: usize,
    rest: &[TemplatePart],
    out: &mut CaptureList<'p>,
) -> bool {
    out.push(&path[start..end]);
    if match_from(path, end, rest, out) {
        return true;
    }
    out.pop();
    false
}
