use std::io::Cursor;

use aok::{OK, Void};
use log::info;
use vm_trace::{Access, Error, Header, Ref, Trace, Writer};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

const HEAD: &str = "TP=512\nNF=4\nNC=5\nNR=3\nNP=12\n";

fn trace(body: &str) -> vm_trace::Result<Trace<Cursor<String>>> {
  Trace::new(Cursor::new(format!("{HEAD}{body}")))
}

#[test]
fn test_header() -> Void {
  let t = trace("")?;
  assert_eq!(
    *t.header(),
    Header {
      page_size: 512,
      rows: 4,
      cols: 5,
      refs: 3,
      pages: 12,
    }
  );
  OK
}

#[test]
fn test_header_errors() -> Void {
  let r = Trace::new(Cursor::new("TP=512\nNF=4\nNC=5\nNR=3\n"));
  assert!(matches!(r, Err(Error::MissingHeader("NP"))));

  let r = Trace::new(Cursor::new("TP=abc\nNF=4\nNC=5\nNR=3\nNP=1\n"));
  assert!(matches!(r, Err(Error::BadHeader { ref key, .. }) if key == "TP"));

  let r = Trace::new(Cursor::new("TP=0\nNF=4\nNC=5\nNR=3\nNP=1\n"));
  assert!(matches!(r, Err(Error::PageSize(0))));

  let r = Trace::new(Cursor::new("TP=-4\nNF=4\nNC=5\nNR=3\nNP=1\n"));
  assert!(matches!(r, Err(Error::BadHeader { .. })));

  let r = Trace::new(Cursor::new("TP 512\n"));
  assert!(matches!(r, Err(Error::BadHeader { .. })));

  let r = Trace::new(Cursor::new(""));
  assert!(matches!(r, Err(Error::MissingHeader("TP"))));
  OK
}

#[test]
fn test_header_requires_every_key() -> Void {
  // 重复键占用一行，NC 缺失
  let r = Trace::new(Cursor::new("TP=512\nNF=4\nNF=4\nNR=3\nNP=1\n"));
  assert!(matches!(r, Err(Error::MissingHeader("NC"))));

  let r = Trace::new(Cursor::new("NP=1\nNC=5\nTP=512\nNR=3\nNF=4\n"))?;
  assert_eq!(r.header().rows, 4);

  // 仅三行头部时，引用行不会被当作缺省
  let r = Trace::new(Cursor::new("TP=512\nNR=1\nNP=1\na,0,0,R\n"));
  assert!(matches!(r, Err(Error::BadHeader { .. })));
  OK
}

#[test]
fn test_access_parse() -> Void {
  assert_eq!(
    Access::parse("Imagen[0][0].r,0,0,R"),
    Some(Access::read(0))
  );
  assert_eq!(Access::parse("Rta[1][1].b,7,12,W"), Some(Access::write(7)));
  assert_eq!(Access::parse("Rta[1][1].b,7,12,W\r"), Some(Access::write(7)));
  // 字段不足
  assert_eq!(Access::parse("SOBEL_X[0][0],3,0"), None);
  assert_eq!(Access::parse(""), None);
  // 页号非数字
  assert_eq!(Access::parse("x,page,0,R"), None);
  OK
}

#[test]
fn test_skip_malformed() -> Void {
  let mut t = trace("a,1,0,R\nbroken\nb,2,4\n\nc,3,8,W\nd,x,0,R\n")?;
  let got: Vec<Access> = (&mut t).collect::<vm_trace::Result<_>>()?;
  assert_eq!(got, vec![Access::read(1), Access::write(3)]);
  assert_eq!(t.parsed(), 2);
  assert_eq!(t.skipped(), 3);
  info!("parsed {} skipped {}", t.parsed(), t.skipped());
  OK
}

#[test]
fn test_invalid_utf8_label() -> Void {
  let mut bytes = HEAD.as_bytes().to_vec();
  bytes.extend_from_slice(b"a,0,0,R\nImagen\xff,1,0,W\n\xfe\xff\n");
  let mut t = Trace::new(Cursor::new(bytes))?;
  let got: Vec<Access> = (&mut t).collect::<vm_trace::Result<_>>()?;
  assert_eq!(got, vec![Access::read(0), Access::write(1)]);
  assert_eq!(t.parsed(), 2);
  assert_eq!(t.skipped(), 1);
  OK
}

#[test]
fn test_write_then_read_file() -> Void {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("img_ref_512B.txt");

  let header = Header {
    page_size: 512,
    rows: 3,
    cols: 3,
    refs: 3,
    pages: 4,
  };
  let refs = [
    Ref {
      label: "Imagen[0][0].r",
      page: 0,
      offset: 0,
      write: false,
    },
    Ref {
      label: "SOBEL_X[0][0]",
      page: 1,
      offset: 4,
      write: false,
    },
    Ref {
      label: "Rta[1][1].g",
      page: 3,
      offset: 13,
      write: true,
    },
  ];

  let mut w = Writer::new(std::fs::File::create(&path)?, &header)?;
  assert!(w.is_empty());
  for r in &refs {
    w.push(r)?;
  }
  assert_eq!(w.len(), 3);
  w.finish()?;

  let text = std::fs::read_to_string(&path)?;
  assert!(text.starts_with("TP=512\nNF=3\nNC=3\nNR=3\nNP=4\n"));
  assert!(text.ends_with("Rta[1][1].g,3,13,W\n"));

  let t = Trace::open(&path)?;
  assert_eq!(*t.header(), header);
  let got: Vec<Access> = t.collect::<vm_trace::Result<_>>()?;
  let want: Vec<Access> = refs.iter().map(Ref::access).collect();
  assert_eq!(got, want);
  OK
}

#[test]
fn test_open_missing_file() -> Void {
  let dir = tempfile::tempdir()?;
  let r = Trace::open(dir.path().join("none.txt"));
  assert!(matches!(r, Err(Error::Io(_))));
  OK
}
