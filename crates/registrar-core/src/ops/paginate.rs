use crate::dto::page::{Page, PageRequest};

///
/// Pagination
///
/// Walks the whole iterator so `total` reflects every matching item, while
/// only materializing the requested window.
///

pub fn paginate<T>(items: impl IntoIterator<Item = T>, request: PageRequest) -> Page<T> {
    let request = request.clamped();
    let end = request.offset.saturating_add(request.limit);
    let mut entries = Vec::new();
    let mut total = 0_u64;

    for item in items {
        if (request.offset..end).contains(&total) {
            entries.push(item);
        }
        total += 1;
    }

    Page { entries, total }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_are_cut_from_the_full_sequence() {
        struct Case {
            name: &'static str,
            request: PageRequest,
            expected: Vec<u32>,
        }

        let cases = [
            Case {
                name: "first page",
                request: PageRequest::new(2, 0),
                expected: vec![1, 2],
            },
            Case {
                name: "middle page",
                request: PageRequest::new(2, 2),
                expected: vec![3, 4],
            },
            Case {
                name: "short tail",
                request: PageRequest::new(10, 4),
                expected: vec![5],
            },
            Case {
                name: "past the end",
                request: PageRequest::new(10, 50),
                expected: vec![],
            },
            Case {
                name: "zero limit",
                request: PageRequest::new(0, 0),
                expected: vec![],
            },
            Case {
                name: "overflowing offset",
                request: PageRequest::new(u64::MAX, u64::MAX),
                expected: vec![],
            },
        ];

        for case in cases {
            let page = paginate(1..=5_u32, case.request);

            assert_eq!(page.entries, case.expected, "case {}", case.name);
            assert_eq!(page.total, 5, "case {}", case.name);
        }
    }

    #[test]
    fn limit_is_clamped() {
        let page = paginate(0..5_000_u32, PageRequest::new(u64::MAX, 0));

        assert_eq!(page.entries.len() as u64, PageRequest::MAX_LIMIT);
        assert_eq!(page.total, 5_000);
    }
}
