//! Fixed project files written by `generate:init`.

pub const SCROLL_TO_TOP: &str = r#"import { useEffect } from 'react';
import { useLocation } from 'react-router-dom';

export function scrollToTop() {
  window.scrollTo({
    top: 0,
    behavior: 'smooth',
  });
}

export default function ScrollToTop(): null {
  const { pathname } = useLocation();

  useEffect(() => {
    scrollToTop();
  }, [pathname]);

  return null;
}
"#;

pub const PUBLIC_ROUTES: &str = r#"import { Suspense } from 'react';
import { Navigate, Outlet } from 'react-router-dom';

const PublicOutlet = () => {
  return (
    <Suspense fallback={<div>Loading...</div>}>
      <Outlet />
    </Suspense>
  );
};

export const publicRoutes = [
  {
    path: '',
    element: <PublicOutlet />,
    children: [{ path: '*', element: <Navigate to="." /> }],
  },
];
"#;
